//! CLI entry point for snaptree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use snaptree::{
    Config, ExclusionSet, ListingOrder, OutputConfig, TreeError, TreeFormatter, completion_notice,
    snapshot,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "snaptree")]
#[command(about = "Snapshot a directory tree into a text file")]
#[command(version)]
struct Args {
    /// Directory to snapshot [default: current directory]
    path: Option<PathBuf>,

    /// File to write the tree to [default: tree.txt]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip entries with this exact name (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Start from an empty exclusion list instead of the built-in one
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Sibling order: fs (listing order) or name
    #[arg(long = "order", value_name = "ORDER")]
    order: Option<ListingOrder>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Number of parallel workers
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,

    /// Also print the tree to stdout
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Control color output of --print: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Path to a TOML configuration file [default: ./snaptree.toml if present]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    /// Layer command-line values over the loaded configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(ref path) = self.path {
            config.root = path.clone();
        }
        if let Some(ref output) = self.output {
            config.output = output.clone();
        }
        if self.no_default_excludes {
            config.exclude = ExclusionSet::new();
        }
        config.exclude.extend(self.exclude.iter().cloned());
        if let Some(order) = self.order {
            config.order = order;
        }
        if self.level.is_some() {
            config.max_depth = self.level;
        }
        if let Some(jobs) = self.jobs {
            config.jobs = jobs;
        }
    }
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("snaptree={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: &Args) -> snaptree::Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;
    tracing::debug!(?config, "resolved configuration");

    let rendering = snapshot(&config)?;

    if args.print {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            show_summary: true,
        });
        formatter
            .print(&rendering)
            .map_err(|source| TreeError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
    }

    if !args.quiet {
        println!("{}", completion_notice(&config.output));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("snaptree: {}", e);
        process::exit(1);
    }
}

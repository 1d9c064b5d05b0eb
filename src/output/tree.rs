//! Tree formatter for console output
//!
//! This module provides `TreeFormatter` which prints a `TreeRendering`
//! with colored directory names.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeRendering;

use super::config::OutputConfig;

/// Formatter for printing a rendered tree.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Print the tree to stdout.
    pub fn print(&self, rendering: &TreeRendering) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(&mut stdout, rendering)
    }

    /// Write the tree to any color-capable writer.
    pub fn write_to<W: WriteColor>(&self, out: &mut W, rendering: &TreeRendering) -> io::Result<()> {
        for entry in rendering.entries() {
            write!(out, "{}{}", entry.prefix, entry.connector())?;
            if entry.is_dir {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(out, "{}", entry.name)?;
            out.reset()?;

            if entry.cycle {
                write!(out, "  ")?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(out, "[recursive link]")?;
                out.reset()?;
            }
            writeln!(out)?;
        }

        if self.config.show_summary {
            writeln!(out)?;
            writeln!(
                out,
                "{} directories, {} files",
                rendering.dir_count(),
                rendering.file_count()
            )?;
        }
        Ok(())
    }
}

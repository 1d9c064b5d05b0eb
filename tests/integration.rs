//! Integration tests for snaptree


use harness::{TestDir, run_snaptree};

#[test]
fn test_writes_tree_file_and_notice() {
    let dir = TestDir::new();
    dir.add_file("src/main.rs", "fn main() {}");

    let (stdout, _stderr, success) = run_snaptree(dir.path(), &[]);
    assert!(success, "snaptree should succeed");
    assert_eq!(stdout.trim_end(), "Directory tree written to tree.txt");
    assert_eq!(
        dir.read("tree.txt").as_deref(),
        Some("└── src\n    └── main.rs")
    );
}

#[test]
fn test_default_excludes() {
    let dir = TestDir::new();
    dir.add_file("node_modules/pkg/index.js", "");
    dir.add_file(".git/HEAD", "ref: refs/heads/main");
    dir.add_file("build/out.o", "");
    dir.add_file(".DS_Store", "");
    dir.add_file("lib/app.dart", "");

    let (_stdout, _stderr, success) = run_snaptree(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        dir.read("tree.txt").as_deref(),
        Some("└── lib\n    └── app.dart")
    );
}

#[test]
fn test_excluded_name_listed_first() {
    let dir = TestDir::new();
    dir.add_dir("node_modules");
    dir.add_dir("src");

    let (_stdout, _stderr, success) = run_snaptree(dir.path(), &["--order", "name"]);
    assert!(success);
    assert_eq!(dir.read("tree.txt").as_deref(), Some("└── src"));
}

#[test]
fn test_single_empty_directory() {
    let dir = TestDir::new();
    dir.add_dir("project/empty");

    let (_stdout, _stderr, success) =
        run_snaptree(dir.path(), &["project", "-o", "snapshot.txt"]);
    assert!(success);
    assert_eq!(dir.read("snapshot.txt").as_deref(), Some("└── empty"));
}

#[test]
fn test_nested_structure_sorted() {
    let dir = TestDir::new();
    dir.add_dir("root/a/b");
    dir.add_dir("root/c");

    let (_stdout, _stderr, success) =
        run_snaptree(dir.path(), &["root", "--order", "name"]);
    assert!(success);
    assert_eq!(
        dir.read("tree.txt").as_deref(),
        Some("├── a\n│   └── b\n└── c")
    );
}

#[test]
fn test_extra_exclude_and_no_defaults() {
    let dir = TestDir::new();
    dir.add_file("root/node_modules/x.js", "");
    dir.add_file("root/target/debug.bin", "");

    let (_stdout, _stderr, success) = run_snaptree(
        dir.path(),
        &["root", "--no-default-excludes", "-e", "target", "--order", "name"],
    );
    assert!(success);
    assert_eq!(
        dir.read("tree.txt").as_deref(),
        Some("└── node_modules\n    └── x.js")
    );
}

#[test]
fn test_depth_limit() {
    let dir = TestDir::new();
    dir.add_file("root/top.txt", "");
    dir.add_file("root/level1/mid.txt", "");
    dir.add_file("root/level1/level2/deep.txt", "");

    let (_stdout, _stderr, success) = run_snaptree(dir.path(), &["root", "-L", "1"]);
    assert!(success);
    let tree = dir.read("tree.txt").unwrap();
    assert!(tree.contains("level1"), "should show first level dir");
    assert!(tree.contains("top.txt"));
    assert!(!tree.contains("mid.txt"), "should not descend: {}", tree);
}

#[test]
fn test_print_echoes_tree() {
    let dir = TestDir::new();
    dir.add_file("root/a.txt", "");
    dir.add_file("root/b/c.txt", "");

    let (stdout, _stderr, success) = run_snaptree(
        dir.path(),
        &["root", "--print", "--color", "never", "--order", "name"],
    );
    assert!(success);
    assert!(
        stdout.starts_with("├── a.txt\n└── b\n    └── c.txt\n\n1 directories, 2 files\n"),
        "unexpected stdout: {}",
        stdout
    );
    assert!(stdout.ends_with("Directory tree written to tree.txt\n"));
}

#[test]
fn test_quiet_suppresses_notice() {
    let dir = TestDir::new();
    dir.add_file("root/a.txt", "");

    let (stdout, _stderr, success) = run_snaptree(dir.path(), &["root", "-q"]);
    assert!(success);
    assert!(stdout.is_empty(), "unexpected stdout: {}", stdout);
    assert_eq!(dir.read("tree.txt").as_deref(), Some("└── a.txt"));
}

#[test]
fn test_parallel_output_matches_sequential() {
    let dir = TestDir::new();
    for i in 0..5 {
        for j in 0..3 {
            dir.add_file(&format!("root/d{i}/s{j}/f.txt"), "");
        }
    }

    let (_, _, ok) = run_snaptree(dir.path(), &["root", "--order", "name", "-o", "seq.txt"]);
    assert!(ok);
    let (_, _, ok) = run_snaptree(
        dir.path(),
        &["root", "--order", "name", "-j", "4", "-o", "par.txt"],
    );
    assert!(ok);
    assert_eq!(dir.read("seq.txt"), dir.read("par.txt"));
}

#[test]
fn test_repeat_runs_are_identical() {
    let dir = TestDir::new();
    dir.add_file("root/one/two.txt", "");
    dir.add_file("root/three.txt", "");

    let (_, _, ok) = run_snaptree(dir.path(), &["root", "-o", "first.txt"]);
    assert!(ok);
    let (_, _, ok) = run_snaptree(dir.path(), &["root", "-o", "second.txt"]);
    assert!(ok);
    assert_eq!(dir.read("first.txt"), dir.read("second.txt"));
}

#[test]
fn test_config_file_discovered() {
    let dir = TestDir::new();
    dir.add_file("project/keep.txt", "");
    dir.add_file("project/vendor/lib.c", "");
    dir.add_file(
        "snaptree.toml",
        "root = \"project\"\nexclude = [\"vendor\"]\noutput = \"layout.txt\"\n",
    );

    let (stdout, _stderr, success) = run_snaptree(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("layout.txt"));
    assert_eq!(dir.read("layout.txt").as_deref(), Some("└── keep.txt"));
}

#[test]
fn test_cli_overrides_config_file() {
    let dir = TestDir::new();
    dir.add_file("project/keep.txt", "");
    dir.add_file("other/else.txt", "");
    dir.add_file("custom.toml", "root = \"project\"\n");

    let (_stdout, _stderr, success) =
        run_snaptree(dir.path(), &["other", "--config", "custom.toml"]);
    assert!(success);
    assert_eq!(dir.read("tree.txt").as_deref(), Some("└── else.txt"));
}

//! Rendered tree output
//!
//! - `file` - the plain-text snapshot file
//! - `tree` - optional colored echo to the console
//! - `config` - console output configuration

mod config;
mod file;
mod tree;

use std::path::Path;

pub use config::OutputConfig;
pub use file::{write_lines, write_tree_file};
pub use tree::TreeFormatter;

/// Completion message shown after the snapshot file is written.
pub fn completion_notice(path: &Path) -> String {
    format!("Directory tree written to {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_notice() {
        assert_eq!(
            completion_notice(Path::new("tree.txt")),
            "Directory tree written to tree.txt"
        );
    }
}

//! snaptree - snapshot a project's directory structure into a text file

pub mod config;
pub mod error;
pub mod output;
pub mod snapshot;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{ConfigError, Result, TreeError};
pub use output::{OutputConfig, TreeFormatter, completion_notice, write_tree_file};
pub use snapshot::snapshot;
pub use tree::{ExclusionSet, ListingOrder, RenderOptions, TreeRenderer, TreeRendering, render};

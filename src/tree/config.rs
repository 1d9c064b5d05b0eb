//! Configuration types for the tree renderer

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::filter::ExclusionSet;

/// Order in which siblings are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingOrder {
    /// Whatever order the filesystem listing returns
    #[default]
    Fs,
    /// Byte-wise by file name
    Name,
}

/// Configuration for tree rendering behavior.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub exclude: ExclusionSet,
    pub order: ListingOrder,
    /// Deepest level shown; directories at this level are listed but not
    /// descended into. Root's children are level 1.
    pub max_depth: Option<usize>,
    /// Number of workers for rendering sibling subtrees.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub jobs: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            exclude: ExclusionSet::new(),
            order: ListingOrder::Fs,
            max_depth: None,
            jobs: 1,
        }
    }
}

impl RenderOptions {
    pub fn is_parallel(&self) -> bool {
        self.jobs != 1
    }
}

//! Name-based exclusion for tree rendering

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Names skipped by default: dependency caches, VCS metadata, build output
/// and editor folders.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules",
    ".git",
    ".dart_tool",
    "dist",
    "build",
    "coverage",
    "logs",
    "tmp",
    ".cache",
    ".vscode",
    ".idea",
    "ios",
    "android",
    ".DS_Store",
];

/// A set of literal entry names to skip.
///
/// Matching is exact and case-sensitive against an entry's base name, at any
/// depth and for both files and directories. An excluded directory hides its
/// whole subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    /// An empty set; nothing is excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in set of [`DEFAULT_EXCLUDES`].
    pub fn standard() -> Self {
        DEFAULT_EXCLUDES.iter().copied().collect()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

//! Directory listing and prefix bookkeeping used by the renderer.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Result, TreeError};

use super::config::{ListingOrder, RenderOptions};

/// A non-excluded name found by listing a directory, not yet stat'ed.
#[derive(Debug, Clone)]
pub struct Child {
    pub name: String,
    pub path: PathBuf,
}

/// A child whose kind is known.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Per-directory traversal helpers bound to one set of options.
pub struct BaseTraversal<'a> {
    pub options: &'a RenderOptions,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// Whether entries at `depth` should not be descended into.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.options.max_depth.is_some_and(|max| depth >= max)
    }

    /// List, order and filter the children of `dir`.
    ///
    /// Excluded names are dropped here, before anything stats them.
    pub fn list_children(&self, dir: &Path) -> Result<Vec<Child>> {
        let read_err = |source| TreeError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut listing = fs::read_dir(dir)
            .map_err(read_err)?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(read_err)?;

        if self.options.order == ListingOrder::Name {
            listing.sort_by_key(|e| e.file_name());
        }

        Ok(listing
            .into_iter()
            .filter_map(|item| {
                let name = item.file_name().to_string_lossy().into_owned();
                if self.options.exclude.contains(&name) {
                    tracing::trace!(name = %name, "excluded");
                    return None;
                }
                Some(Child {
                    name,
                    path: item.path(),
                })
            })
            .collect())
    }

    /// Stat a child, following symlinks, so a dangling link is an error.
    pub fn stat(child: Child) -> Result<Entry> {
        let meta = fs::metadata(&child.path).map_err(|source| TreeError::Stat {
            path: child.path.clone(),
            source,
        })?;
        Ok(Entry {
            name: child.name,
            path: child.path,
            is_dir: meta.is_dir(),
        })
    }

    /// Calculate the prefix for child entries
    pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}    ", current_prefix)
        } else {
            format!("{}│   ", current_prefix)
        }
    }
}

/// Canonical identities of the directories on the current root-to-node path.
///
/// Branches share their common ancestors, so descending is O(1) in memory.
#[derive(Debug, Clone)]
pub struct Ancestry(Arc<AncestorNode>);

#[derive(Debug)]
struct AncestorNode {
    id: PathBuf,
    parent: Option<Arc<AncestorNode>>,
    depth: usize,
}

impl Ancestry {
    pub fn root(path: &Path) -> Result<Self> {
        Ok(Self(Arc::new(AncestorNode {
            id: canonical(path)?,
            parent: None,
            depth: 1,
        })))
    }

    /// Extend the path with `dir`, or `None` if `dir` resolves to a
    /// directory already on it.
    pub fn descend(&self, dir: &Path) -> Result<Option<Self>> {
        let id = canonical(dir)?;
        if self.contains(&id) {
            return Ok(None);
        }
        Ok(Some(Self(Arc::new(AncestorNode {
            id,
            parent: Some(Arc::clone(&self.0)),
            depth: self.0.depth + 1,
        }))))
    }

    pub fn depth(&self) -> usize {
        self.0.depth
    }

    fn contains(&self, id: &Path) -> bool {
        // Canonical paths compare byte-wise.
        let mut node = Some(&self.0);
        while let Some(n) = node {
            if n.id.as_os_str() == id.as_os_str() {
                return true;
            }
            node = n.parent.as_ref();
        }
        false
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|source| TreeError::Stat {
        path: path.to_path_buf(),
        source,
    })
}

//! TreeRenderer - depth-first rendering of a directory into connector lines

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::Result;

use super::config::RenderOptions;
use super::filter::ExclusionSet;
use super::traversal::{Ancestry, BaseTraversal, Child};

const BRANCH: &str = "├── ";
const LEAF: &str = "└── ";

/// One rendered line, kept in parts so outputs can style them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub prefix: String,
    pub name: String,
    pub is_dir: bool,
    pub is_last: bool,
    /// Set on a directory that resolves to one of its own ancestors; its
    /// contents are not rendered.
    pub cycle: bool,
}

impl RenderedEntry {
    pub fn connector(&self) -> &'static str {
        if self.is_last { LEAF } else { BRANCH }
    }

    pub fn line(&self) -> String {
        format!("{}{}{}", self.prefix, self.connector(), self.name)
    }
}

/// Pre-order sequence of rendered entries with running counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeRendering {
    entries: Vec<RenderedEntry>,
    dir_count: usize,
    file_count: usize,
}

impl TreeRendering {
    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(RenderedEntry::line).collect()
    }

    /// Lines joined with `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn dir_count(&self) -> usize {
        self.dir_count
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: RenderedEntry) {
        if entry.is_dir {
            self.dir_count += 1;
        } else {
            self.file_count += 1;
        }
        self.entries.push(entry);
    }

    fn append(&mut self, other: TreeRendering) {
        self.dir_count += other.dir_count;
        self.file_count += other.file_count;
        self.entries.extend(other.entries);
    }
}

/// Levels below this are rendered sequentially even when `jobs != 1`.
const MAX_FAN_OUT_DEPTH: usize = 4;

/// Stack size for rendering workers; deep chains recurse once per level.
const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// A directory still to be rendered beneath an emitted entry.
struct Subtree {
    path: PathBuf,
    prefix: String,
    ancestry: Ancestry,
}

/// Renders a directory tree as `├── `/`└── ` lines.
///
/// Siblings are rendered in listing order and the last *shown* sibling gets
/// the leaf connector, even when excluded names follow it in the listing.
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render everything beneath `root`. The root itself gets no line.
    ///
    /// Any listing or stat failure aborts the whole rendering.
    pub fn render(&self, root: &Path) -> Result<TreeRendering> {
        let ancestry = Ancestry::root(root)?;

        let rendering = if self.options.is_parallel() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.jobs)
                .stack_size(WORKER_STACK_SIZE)
                .build()?;
            pool.install(|| self.render_dir(root, "", &ancestry))?
        } else {
            self.render_dir(root, "", &ancestry)?
        };

        tracing::info!(
            root = %root.display(),
            dirs = rendering.dir_count(),
            files = rendering.file_count(),
            "rendered tree"
        );
        Ok(rendering)
    }

    fn render_dir(&self, dir: &Path, prefix: &str, ancestry: &Ancestry) -> Result<TreeRendering> {
        let traversal = BaseTraversal::new(&self.options);
        let children = traversal.list_children(dir)?;
        tracing::debug!(path = %dir.display(), entries = children.len(), "listed directory");

        let count = children.len();
        let mut rendering = TreeRendering::default();

        if self.options.is_parallel() && ancestry.depth() <= MAX_FAN_OUT_DEPTH {
            let visited = children
                .into_iter()
                .enumerate()
                .map(|(i, child)| self.visit(&traversal, child, i + 1 == count, prefix, ancestry))
                .collect::<Result<Vec<_>>>()?;

            let subtrees: Vec<Option<TreeRendering>> = visited
                .par_iter()
                .map(|(_, subtree)| {
                    subtree
                        .as_ref()
                        .map(|s| self.render_dir(&s.path, &s.prefix, &s.ancestry))
                        .transpose()
                })
                .collect::<Result<_>>()?;

            for ((line, _), subtree) in visited.into_iter().zip(subtrees) {
                rendering.push(line);
                if let Some(subtree) = subtree {
                    rendering.append(subtree);
                }
            }
        } else {
            for (i, child) in children.into_iter().enumerate() {
                let (line, subtree) =
                    self.visit(&traversal, child, i + 1 == count, prefix, ancestry)?;
                rendering.push(line);
                if let Some(s) = subtree {
                    rendering.append(self.render_dir(&s.path, &s.prefix, &s.ancestry)?);
                }
            }
        }

        Ok(rendering)
    }

    /// Stat one child and decide whether to descend into it.
    fn visit(
        &self,
        traversal: &BaseTraversal<'_>,
        child: Child,
        is_last: bool,
        prefix: &str,
        ancestry: &Ancestry,
    ) -> Result<(RenderedEntry, Option<Subtree>)> {
        let entry = BaseTraversal::stat(child)?;
        let mut subtree = None;
        let mut cycle = false;

        if entry.is_dir && !traversal.at_max_depth(ancestry.depth()) {
            match ancestry.descend(&entry.path)? {
                Some(child) => {
                    subtree = Some(Subtree {
                        prefix: BaseTraversal::child_prefix(prefix, is_last),
                        path: entry.path,
                        ancestry: child,
                    });
                }
                None => {
                    tracing::warn!(
                        path = %entry.path.display(),
                        "directory links back to an ancestor, not descending"
                    );
                    cycle = true;
                }
            }
        }

        let line = RenderedEntry {
            prefix: prefix.to_string(),
            name: entry.name,
            is_dir: entry.is_dir,
            is_last,
            cycle,
        };
        Ok((line, subtree))
    }
}

/// Render `root` with the given exclusions and default options, returning
/// one string per entry in display order.
pub fn render(root: &Path, exclusions: &ExclusionSet) -> Result<Vec<String>> {
    let options = RenderOptions {
        exclude: exclusions.clone(),
        ..RenderOptions::default()
    };
    Ok(TreeRenderer::new(options).render(root)?.lines())
}

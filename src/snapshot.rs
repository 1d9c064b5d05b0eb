//! Render-then-write driver shared by the CLI and tests

use crate::config::Config;
use crate::error::Result;
use crate::output::write_tree_file;
use crate::tree::{TreeRenderer, TreeRendering};

/// Render `config.root` and write it to `config.output`.
///
/// The tree is fully rendered before the output file is touched, so a
/// traversal failure leaves no file behind.
pub fn snapshot(config: &Config) -> Result<TreeRendering> {
    let renderer = TreeRenderer::new(config.render_options());
    let rendering = renderer.render(&config.root)?;
    write_tree_file(&rendering, &config.output)?;
    Ok(rendering)
}

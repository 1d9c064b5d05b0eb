//! Plain-text file output

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TreeError};
use crate::tree::TreeRendering;

/// Write one line per entry, newline-separated, with no trailing newline.
pub fn write_lines<W: Write>(out: &mut W, rendering: &TreeRendering) -> io::Result<()> {
    for (i, entry) in rendering.entries().iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        out.write_all(entry.line().as_bytes())?;
    }
    out.flush()
}

/// Write the rendering to `path`, replacing any existing file.
pub fn write_tree_file(rendering: &TreeRendering, path: &Path) -> Result<()> {
    let write_err = |source| TreeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    write_lines(&mut out, rendering).map_err(write_err)?;

    tracing::debug!(path = %path.display(), lines = rendering.len(), "wrote tree file");
    Ok(())
}

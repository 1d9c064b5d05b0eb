//! Directory tree rendering
//!
//! `TreeRenderer` walks a directory depth-first and produces one
//! `RenderedEntry` per visible entry, in pre-order:
//!
//! ```text
//! ├── src
//! │   └── main.rs
//! └── Cargo.toml
//! ```

mod config;
mod filter;
mod renderer;
mod traversal;

pub use config::{ListingOrder, RenderOptions};
pub use filter::{DEFAULT_EXCLUDES, ExclusionSet};
pub use renderer::{RenderedEntry, TreeRenderer, TreeRendering, render};

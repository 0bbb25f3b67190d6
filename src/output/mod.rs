//! Tree formatting and the output file
//!
//! - `text` - `TextFormatter`, the plain connector-tree renderer
//! - `writer` - renders a `Config` root into its output file

mod text;
mod writer;

pub use text::{TextFormatter, render_tree};
pub use writer::write_tree;

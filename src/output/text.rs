//! Plain-text formatter
//!
//! `TextFormatter` collects the tree into a `String`, one line per entry,
//! with no root line and no trailing summary.

use std::path::Path;

use crate::error::Result;
use crate::tree::{Entry, TreeOutput, TreeWalker, connector};

/// Buffers the rendered tree.
#[derive(Debug, Default)]
pub struct TextFormatter {
    buf: String,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl TreeOutput for TextFormatter {
    fn output_node(&mut self, entry: &Entry, is_last: bool, prefix: &str) {
        self.buf.push_str(prefix);
        self.buf.push_str(connector(is_last));
        self.buf.push_str(&entry.name);
        self.buf.push('\n');
    }
}

/// Render everything below `root` as a connector tree, each line starting with `prefix`.
pub fn render_tree(root: &Path, prefix: &str) -> Result<String> {
    let mut formatter = TextFormatter::new();
    TreeWalker::new()
        .with_prefix(prefix)
        .walk(root, &mut formatter)?;
    Ok(formatter.into_string())
}

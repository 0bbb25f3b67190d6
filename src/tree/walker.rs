//! TreeWalker - depth-first traversal driving a `TreeOutput` sink

use std::fs;
use std::path::Path;
use std::vec;

use tracing::debug;

use crate::error::{Error, Result};

use super::entry::{Entry, read_entries};
use super::utils::child_prefix;

/// Receives entries in display order.
pub trait TreeOutput {
    /// Called once per entry. `prefix` is the indentation accumulated from
    /// ancestors, without this entry's connector.
    fn output_node(&mut self, entry: &Entry, is_last: bool, prefix: &str);
}

/// Counts of what a walk visited. The root is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub dir_count: usize,
    pub file_count: usize,
}

/// Remaining entries of one open directory.
struct Frame {
    entries: vec::IntoIter<Entry>,
    prefix: String,
}

impl Frame {
    fn open(dir: &Path, prefix: String) -> Result<Self> {
        let entries = read_entries(dir)?;
        debug!(path = %dir.display(), entries = entries.len(), "read directory");
        Ok(Self {
            entries: entries.into_iter(),
            prefix,
        })
    }
}

/// Walks a directory tree depth-first, in sorted order.
///
/// Directories are kept on an explicit stack rather than the call stack, so
/// depth is limited by memory and the OS path limit only.
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    prefix: String,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every line, as if the tree were nested under it.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Walk everything below `root`, reporting each entry to `output`.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<TreeStats> {
        let meta = fs::metadata(root).map_err(|source| Error::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        let mut stats = TreeStats::default();
        let mut stack = vec![Frame::open(root, self.prefix.clone())?];

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                stack.pop();
                continue;
            };
            let is_last = frame.entries.as_slice().is_empty();

            output.output_node(&entry, is_last, &frame.prefix);

            if entry.kind.is_dir() {
                stats.dir_count += 1;
                let prefix = child_prefix(&frame.prefix, is_last);
                stack.push(Frame::open(&entry.path, prefix)?);
            } else {
                stats.file_count += 1;
            }
        }

        Ok(stats)
    }
}

//! structree - write a directory's layout to a text file as a connector tree

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, DEFAULT_OUTPUT};
pub use error::{Error, Result};
pub use output::{TextFormatter, render_tree, write_tree};
pub use tree::{Entry, EntryKind, TreeOutput, TreeStats, TreeWalker};

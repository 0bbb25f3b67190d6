//! Directory tree walking
//!
//! `TreeWalker` reads each directory once, sorts it, and reports entries to a
//! `TreeOutput` sink in display order along with the prefix that lines them up
//! under their parent.

mod entry;
mod utils;
mod walker;

pub use entry::{Entry, EntryKind, read_entries};
pub use utils::{CORNER, TEE, child_prefix, connector};
pub use walker::{TreeOutput, TreeStats, TreeWalker};

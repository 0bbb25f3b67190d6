//! Directory entries as the walker sees them

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Whether an entry is descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// A single name inside a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Read the entries of `dir`, sorted by raw file name.
///
/// The kind follows symlinks, so a link to a directory is listed (and walked)
/// as a directory. Broken links and other non-directories count as files.
pub fn read_entries(dir: &Path) -> Result<Vec<Entry>> {
    let read_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = std::fs::read_dir(dir)
        .map_err(read_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort_by_key(|a| a.file_name());

    Ok(entries
        .into_iter()
        .map(|entry| {
            let path = entry.path();
            let kind = if path.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                kind,
            }
        })
        .collect())
}

//! Error type shared by the walker and the output writer

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Listing a directory, or reading one of its entries, failed.
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Creating or writing the output file failed.
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

//! Writing the rendered tree to its output file

use std::fs::File;
use std::io::Write;

use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::tree::{TreeStats, TreeWalker};

use super::text::TextFormatter;

/// Render `config.root` and overwrite `config.output` with the result.
///
/// The output file is created before the walk starts. When it lives inside
/// the root it therefore lists itself on every run, including the first, and
/// repeated runs over an unchanged tree produce identical bytes. If the walk
/// fails the file is left truncated.
pub fn write_tree(config: &Config) -> Result<TreeStats> {
    let write_err = |source| Error::Write {
        path: config.output.clone(),
        source,
    };

    let mut file = File::create(&config.output).map_err(write_err)?;

    let mut formatter = TextFormatter::new();
    let stats = TreeWalker::new().walk(&config.root, &mut formatter)?;

    file.write_all(formatter.as_str().as_bytes())
        .and_then(|()| file.flush())
        .map_err(write_err)?;

    info!(
        output = %config.output.display(),
        dirs = stats.dir_count,
        files = stats.file_count,
        "wrote tree"
    );
    Ok(stats)
}

//! Run configuration

use std::path::PathBuf;

/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "project_structure.txt";

/// What to render and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose descendants are listed. The root itself is not printed.
    pub root: PathBuf,
    /// Output file, overwritten on every run.
    pub output: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_current_dir() {
        let config = Config::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from("project_structure.txt"));
    }

    #[test]
    fn test_builder_keeps_default_output() {
        let config = Config::new("/tmp/project");
        assert_eq!(config.root, PathBuf::from("/tmp/project"));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));

        let config = config.with_output("tree.txt");
        assert_eq!(config.output, PathBuf::from("tree.txt"));
    }
}

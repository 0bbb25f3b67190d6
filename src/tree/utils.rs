//! Connector and prefix rules

/// Connector for an entry that has later siblings.
pub const TEE: &str = "├── ";
/// Connector for the last entry in a directory.
pub const CORNER: &str = "└── ";

/// Connector for an entry given its position among siblings.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { CORNER } else { TEE }
}

/// Prefix for the children of an entry printed with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

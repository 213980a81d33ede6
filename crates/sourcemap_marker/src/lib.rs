// crates/sourcemap_marker/src/lib.rs

//! Shared source-map comment marker used by the build post-processing tools.

/// Exact prefix bundlers emit on the trailing reference line,
/// including the `=`.
pub const SOURCE_MAP_PREFIX: &str = "//# sourceMappingURL=";

/// Returns true when `line` starts with [`SOURCE_MAP_PREFIX`].
///
/// No trimming is applied: leading whitespace means the line is not a marker.
pub fn is_source_map_comment(line: &str) -> bool {
    line.starts_with(SOURCE_MAP_PREFIX)
}

/// Returns the URL part of a marker line with its line terminator removed,
/// or `None` if `line` is not a marker.
pub fn source_map_url(line: &str) -> Option<&str> {
    line.strip_prefix(SOURCE_MAP_PREFIX)
        .map(|url| url.trim_end_matches(['\r', '\n']))
}

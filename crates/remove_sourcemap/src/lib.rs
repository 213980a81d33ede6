// crates/remove_sourcemap/src/lib.rs

//! Removes the trailing `//# sourceMappingURL=` comment from a generated
//! JavaScript artifact, rewriting the file in place.

pub mod config;
mod decode;

pub use config::StripConfig;
pub use decode::{decode, decode_lossy};

use anyhow::{Context, Result};
use sourcemap_marker::{is_source_map_comment, source_map_url};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// What a single strip run did to the file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StripOutcome {
    /// The marker line that was dropped, terminator included.
    pub removed_line: Option<String>,
    /// Invalid bytes discarded while decoding in lossy mode.
    pub dropped_bytes: usize,
    /// Number of lines written back.
    pub lines_written: usize,
}

impl StripOutcome {
    pub fn removed_url(&self) -> Option<&str> {
        self.removed_line.as_deref().and_then(source_map_url)
    }
}

/// Splits `text` into the part to keep and the trailing marker line, if any.
///
/// Lines keep their terminators. Only the last line is inspected; an empty
/// text has no last line and is returned unchanged.
pub fn split_trailing_source_map(text: &str) -> (&str, Option<&str>) {
    match text.split_inclusive('\n').last() {
        Some(last) if is_source_map_comment(last) => {
            (&text[..text.len() - last.len()], Some(last))
        }
        _ => (text, None),
    }
}

/// Strips the trailing source-map comment from the file named by `config`.
///
/// The file is always rewritten, through a temporary file in the same
/// directory that is renamed over the original. When no marker is present and
/// no bytes were dropped the new content is byte-identical to the old.
///
/// # Errors
///
/// Returns an error if the file cannot be read or replaced, or if it contains
/// invalid UTF-8 while `lossy_decode` is off. The original file is left
/// untouched in every error case.
pub fn strip_trailing_source_map(config: &StripConfig) -> Result<StripOutcome> {
    let path = config.path.as_path();
    let bytes =
        fs::read(path).with_context(|| format!("Error reading file {}", path.display()))?;
    log::debug!(
        "Read {} bytes from {} (lossy_decode: {})",
        bytes.len(),
        path.display(),
        config.lossy_decode
    );

    let (text, dropped_bytes) = decode::decode(bytes, config.lossy_decode, path)?;
    if dropped_bytes > 0 {
        log::warn!(
            "Dropped {} undecodable byte(s) from {}",
            dropped_bytes,
            path.display()
        );
    }

    let (kept, removed) = split_trailing_source_map(&text);
    match removed {
        Some(line) => log::info!(
            "Removing source map reference {:?} from {}",
            source_map_url(line).unwrap_or_default(),
            path.display()
        ),
        None => log::debug!("Last line of {} is not a source map reference", path.display()),
    }

    write_atomically(path, kept.as_bytes())?;

    Ok(StripOutcome {
        removed_line: removed.map(str::to_string),
        dropped_bytes,
        lines_written: kept.split_inclusive('\n').count(),
    })
}

/// Replaces `path` with `contents` via a sibling temporary file and a rename,
/// carrying over the original permissions.
///
/// Symlinks are resolved first so the link survives and its target is
/// rewritten. A target that cannot be opened for writing is an error even
/// when its directory would allow the rename.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let resolved = fs::canonicalize(path)
        .with_context(|| format!("Error resolving path {}", path.display()))?;
    let path = resolved.as_path();

    fs::OpenOptions::new()
        .write(true)
        .open(path)
        .with_context(|| format!("Error opening {} for writing", path.display()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Error creating temporary file in {}", dir.display()))?;
    log::debug!("Writing {} bytes to {}", contents.len(), tmp.path().display());

    tmp.write_all(contents)
        .with_context(|| format!("Error writing temporary file {}", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Error syncing temporary file {}", tmp.path().display()))?;

    let permissions = fs::metadata(path)
        .with_context(|| format!("Error reading metadata of {}", path.display()))?
        .permissions();
    fs::set_permissions(tmp.path(), permissions)
        .with_context(|| format!("Error setting permissions on {}", tmp.path().display()))?;

    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("Error replacing {}", path.display()))?;
    Ok(())
}

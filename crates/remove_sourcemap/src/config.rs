// crates/remove_sourcemap/src/config.rs

use std::path::{Path, PathBuf};

/// Environment override for the target file, consulted when `--path` is absent.
pub const PATH_ENV_VAR: &str = "REMOVE_SOURCEMAP_PATH";

/// Configuration for a single strip run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripConfig {
    /// File to process.
    pub path: PathBuf,
    /// Drop undecodable UTF-8 sequences instead of failing.
    pub lossy_decode: bool,
}

impl StripConfig {
    /// Lossy decoding is on by default to match how the artifact has always been treated.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lossy_decode: true,
        }
    }

    pub fn lossy_decode(mut self, lossy: bool) -> Self {
        self.lossy_decode = lossy;
        self
    }

    /// Composes the config from CLI values, the environment override and the
    /// fallback path, in that order of precedence.
    pub fn resolve(
        path_arg: Option<&str>,
        env_path: Option<String>,
        default_path: &str,
        strict: bool,
    ) -> Self {
        let path = match (path_arg, env_path) {
            (Some(arg), _) => PathBuf::from(arg),
            (None, Some(env)) if !env.is_empty() => PathBuf::from(env),
            _ => PathBuf::from(default_path),
        };
        Self::new(path).lossy_decode(!strict)
    }
}

// crates/wasm_to_base64/src/lib.rs

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as B64Engine;
use base64::Engine;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_EXPORT_NAME: &str = "tintWasmBase64";

/// Input, output and export name for one embedding run.
#[derive(Clone, Debug)]
pub struct EmbedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub export_name: String,
}

/// Checks that `name` can be used as a JavaScript `export const` binding.
///
/// Only the ASCII subset of identifiers is accepted.
pub fn validate_export_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => bail!("Export name must not be empty"),
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        bail!("Export name '{}' must start with a letter, '_' or '$'", name);
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
        bail!("Export name '{}' contains invalid character '{}'", name, bad);
    }
    Ok(())
}

/// Renders the TypeScript module exporting `wasm` as a base64 template literal.
pub fn render_module(export_name: &str, wasm: &[u8]) -> String {
    module_source(export_name, &B64Engine.encode(wasm))
}

fn module_source(export_name: &str, encoded: &str) -> String {
    format!("\nexport const {} = `{}`\n", export_name, encoded)
}

/// Reads the wasm binary, encodes it and writes the TypeScript module.
/// Returns the length of the encoded string.
///
/// # Errors
///
/// Returns an error if the export name is invalid, the input cannot be read,
/// or the output cannot be written (its directory is not created).
pub fn embed_wasm_as_base64(config: &EmbedConfig) -> Result<usize> {
    validate_export_name(&config.export_name)?;

    let wasm = fs::read(&config.input)
        .with_context(|| format!("Error reading wasm file {}", config.input.display()))?;
    log::debug!("Read {} bytes from {}", wasm.len(), config.input.display());

    let encoded = B64Engine.encode(&wasm);
    fs::write(&config.output, module_source(&config.export_name, &encoded))
        .with_context(|| format!("Error writing module {}", config.output.display()))?;

    let encoded_len = encoded.len();
    log::info!(
        "Embedded {} as {} ({} base64 chars)",
        config.input.display(),
        config.output.display(),
        encoded_len
    );
    Ok(encoded_len)
}

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use wasm_to_base64::{embed_wasm_as_base64, EmbedConfig, DEFAULT_EXPORT_NAME};

fn main() -> Result<()> {
    let matches = Command::new("wasm_to_base64")
        .version("0.1.0")
        .about("Embeds a wasm binary into a TypeScript module as a base64 string")
        .arg(
            Arg::new("input")
                .long("input")
                .num_args(1)
                .default_value("scripts/tint.wasm")
                .help("Wasm file to encode"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .num_args(1)
                .default_value("src/tint/tintWasmBase64.ts")
                .help("TypeScript module to write"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .num_args(1)
                .default_value(DEFAULT_EXPORT_NAME)
                .help("Name of the exported constant"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    // All three carry default values, so they are always present.
    let value = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
    let config = EmbedConfig {
        input: PathBuf::from(value("input")),
        output: PathBuf::from(value("output")),
        export_name: value("name"),
    };

    let encoded_len = embed_wasm_as_base64(&config)?;
    println!(
        "Wrote {} ({} base64 chars)",
        config.output.display(),
        encoded_len
    );
    Ok(())
}

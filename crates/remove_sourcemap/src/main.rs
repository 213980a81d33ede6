use anyhow::Result;
use clap::{Arg, Command};
use std::env;

use remove_sourcemap::config::PATH_ENV_VAR;
use remove_sourcemap::{strip_trailing_source_map, StripConfig};

/// Artifact produced by the library build.
const DEFAULT_TARGET: &str = "lib/ti.js";

fn main() -> Result<()> {
    let matches = Command::new("remove_sourcemap")
        .version("0.1.0")
        .about("Removes the trailing sourceMappingURL comment from a generated build artifact")
        .arg(
            Arg::new("path")
                .long("path")
                .num_args(1)
                .help("File to process (defaults to lib/ti.js)"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on invalid UTF-8 instead of dropping the offending bytes")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = StripConfig::resolve(
        matches.get_one::<String>("path").map(String::as_str),
        env::var(PATH_ENV_VAR).ok(),
        DEFAULT_TARGET,
        matches.get_flag("strict"),
    );
    log::debug!("Resolved configuration: {:?}", config);

    let outcome = strip_trailing_source_map(&config)?;
    match outcome.removed_url() {
        Some(url) => println!("Removed source map reference: {}", url),
        None => println!("No source map reference found in {}", config.path.display()),
    }

    Ok(())
}

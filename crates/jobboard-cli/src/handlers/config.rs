use std::path::Path;

use anyhow::{Context, Result};
use jobboard_runtime::Config;
use serde::Serialize;

use crate::OutputFormat;
use crate::presentation::print_json;

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default()
        .save_to(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

#[derive(Serialize)]
struct ConfigOutput<'a> {
    path: &'a Path,
    config: &'a Config,
}

/// Print the effective config: file values with environment and flag
/// overrides applied.
pub fn show(config: &Config, config_path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&ConfigOutput {
            path: config_path,
            config,
        }),
        OutputFormat::Plain => {
            println!("# {}", config_path.display());
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}

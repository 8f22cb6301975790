//! Config command handler

use std::path::PathBuf;

use anyhow::Result;

use pin_core::Config;

use crate::output::{Output, OutputFormat};

/// Show the effective configuration
pub fn show(config: &Config, config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let effective_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "api_url": config.api_url,
                    "timeout_secs": config.timeout_secs,
                    "log_file": config.log_file,
                    "config_file": effective_path
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", effective_path.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  api_url:      {}", config.api_url);
            println!("  timeout_secs: {}", config.timeout_secs);
            println!(
                "  log_file:     {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

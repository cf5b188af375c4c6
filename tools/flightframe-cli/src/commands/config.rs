//! Show or persist conversion defaults.

use flightframe_common::config::{config_file_path, AppConfig};

pub fn run(write: bool) -> anyhow::Result<()> {
    let config = AppConfig::load();
    println!("{}", serde_json::to_string_pretty(&config)?);

    if write {
        config
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to save config: {e}"))?;
        println!("\nSaved to: {}", config_file_path().display());
    }

    Ok(())
}

use anyhow::Result;

use crate::cli::ui;
use crate::config::ForgeConfig;

pub fn execute(config: &ForgeConfig) -> Result<()> {
    ui::print_header("scriptforge Configuration");

    ui::print_result("API Key", &config.masked_api_key());
    ui::print_result("Model", &config.model);
    ui::print_result("Save Location", &config.save_location().display().to_string());
    ui::print_result("Auto Save", &config.auto_save.to_string());
    ui::print_result("Streaming", &config.streaming.to_string());
    ui::print_result("Max Attempts", &config.max_attempts.to_string());
    ui::print_result("Retry Backoff", &format!("{} ms", config.retry_backoff_ms));
    if let Some(path) = ForgeConfig::default_path() {
        ui::print_result("Config File", &path.display().to_string());
    }

    Ok(())
}

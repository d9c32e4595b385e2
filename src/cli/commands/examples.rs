use anyhow::Result;

use crate::cli::ui;

pub fn execute() -> Result<()> {
    ui::print_header("scriptforge Usage Examples");

    ui::print_text(
        "First time setup:\n\
         \x20 export GEMINI_API_KEY=...   # or set api_key in ~/.scriptforge/config.yaml\n\
         \x20 scriptforge config          # view the active configuration\n\
         \x20 scriptforge test            # check connectivity\n\
         \n\
         Basic usage:\n\
         \x20 scriptforge generate \"Create a CSV parser with error handling\"\n\
         \x20 scriptforge generate \"Build a log file analyzer\" --save\n\
         \x20 scriptforge generate \"Simple web scraper\" --stream\n\
         \n\
         Example prompts:\n\
         \x20 - Create a Perl script to monitor disk usage and send alerts\n\
         \x20 - Build a JSON parser with validation and error handling\n\
         \x20 - Generate a simple HTTP client with authentication\n\
         \x20 - Create a log rotation script for system administration",
    );

    Ok(())
}

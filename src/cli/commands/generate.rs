use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use log::info;

use crate::cli::ui;
use crate::client::GeminiClient;
use crate::config::ForgeConfig;
use crate::generator::GenerationController;
use crate::materializer;

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    config: &ForgeConfig,
    model: Option<&str>,
    prompt: &[String],
    save: bool,
    filename: Option<&str>,
    output_dir: Option<PathBuf>,
    stream: bool,
    attempts: Option<u32>,
) -> Result<()> {
    if prompt.is_empty() {
        return Err(anyhow!(
            "please provide a description, e.g. scriptforge generate \"Create a CSV parser script\""
        ));
    }
    let request = prompt.join(" ");

    let api_key = config.resolve_api_key()?;
    let model = model.unwrap_or(&config.model);
    let client = GeminiClient::new(model, &api_key);

    let mut controller = GenerationController::new(client)
        .with_max_attempts(attempts.unwrap_or(config.max_attempts))
        .with_backoff(Duration::from_millis(config.retry_backoff_ms))
        .with_streaming(stream || config.streaming);

    info!("generating with model {}", model);
    let spinner = ui::create_spinner(&format!("generating structured code using {}...", model));
    let result = controller.generate(&request).await;
    spinner.finish_and_clear();

    let Some(doc) = result else {
        ui::print_error("no usable result was produced");
        if let Some(raw) = controller.last_raw_response() {
            ui::print_warning("last raw response, for diagnosis:");
            ui::print_text(raw);
        }
        return Err(anyhow!("generation exhausted its attempt budget"));
    };

    ui::print_document(&doc);

    let should_save = save || config.auto_save || ui::confirm_save()?;
    if should_save {
        let target_dir = output_dir.unwrap_or_else(|| config.save_location());
        std::fs::create_dir_all(&target_dir)?;

        let filename = match filename {
            Some(name) => name.to_string(),
            None => ui::ask_filename()?,
        };

        let report = materializer::materialize(&doc, &target_dir, Some(&filename));
        ui::print_write_report(&report);

        if !doc.dependencies.third_party.is_empty() {
            ui::print_info("install dependencies with:");
            for module in &doc.dependencies.third_party {
                println!("   {}", module.install_command);
            }
        }
        if let Some(primary) = report.written.first() {
            ui::print_info(&format!("run with: perl {}", primary.display()));
        }
    }

    Ok(())
}

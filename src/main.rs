use anyhow::Result;
use clap::Parser;
use log::debug;

use scriptforge::cli::{commands, ForgeCli, Commands};
use scriptforge::config::ForgeConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = ForgeCli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.clone()),
    )
    .init();

    let config = ForgeConfig::load(cli.config.as_deref())?;
    debug!("configuration loaded, model {}", config.model);

    match cli.command {
        Commands::Generate {
            prompt,
            save,
            filename,
            output_dir,
            stream,
            attempts,
        } => {
            commands::generate::execute(
                &config,
                cli.model.as_deref(),
                &prompt,
                save,
                filename.as_deref(),
                output_dir,
                stream,
                attempts,
            )
            .await
        }
        Commands::Config => commands::config::execute(&config),
        Commands::Test => commands::test::execute(&config, cli.model.as_deref()).await,
        Commands::Examples => commands::examples::execute(),
    }
}

use clap::Parser;
use csv_intake::utils::{logger, validation::Validate};
use csv_intake::{CliConfig, IntakeConfig, IntakeEngine, IntakeError, LocalStorage};

fn load_config(cli: &CliConfig) -> Result<IntakeConfig, IntakeError> {
    let file_config = match &cli.config {
        Some(path) => IntakeConfig::from_file(path)?,
        None => IntakeConfig::default(),
    };
    let config = cli.merge_into(file_config);
    config.validate()?;
    Ok(config)
}

fn exit_code_for_status(status: u16) -> i32 {
    match status {
        200..=299 => 0,
        400..=499 => 1,
        _ => 2,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    logger::init_logger(config.verbose(), config.log_format());
    tracing::info!("Starting csv-intake");
    tracing::debug!("Resolved config: {:?}", config);

    let storage = LocalStorage::new(config.base_path().to_string());
    let engine = IntakeEngine::new(storage);

    match engine.run(cli.file.as_deref()).await {
        Ok(response) => {
            println!("{}", response.to_json(config.pretty())?);
            let exit_code = exit_code_for_status(response.status);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::error!(
                "Upload processing failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(3);
        }
    }

    Ok(())
}

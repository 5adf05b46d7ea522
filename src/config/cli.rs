use crate::config::toml_config::IntakeConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "csv-intake")]
#[command(about = "Validate an uploaded product CSV file")]
pub struct CliConfig {
    /// Uploaded CSV file, relative to the base path
    pub file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory uploads are resolved against
    #[arg(long)]
    pub base_path: Option<String>,

    #[arg(long, help = "Pretty-print the JSON response")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Applies command line flags on top of a file configuration.
    pub fn merge_into(&self, mut config: IntakeConfig) -> IntakeConfig {
        if let Some(base_path) = &self.base_path {
            config.upload.base_path = Some(base_path.clone());
        }
        if self.pretty {
            config.output.pretty = Some(true);
        }
        if self.json_logs {
            config.logging.format = Some("json".to_string());
        }
        if self.verbose {
            config.logging.verbose = Some(true);
        }
        config
    }
}

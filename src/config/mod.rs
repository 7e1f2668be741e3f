pub mod toml_config;

pub use toml_config::{FormConfig, FormSection, MessagesConfig, OutboundConfig, OutboundMode};

#[cfg(feature = "cli")]
use crate::domain::model::FormKind;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sparkle-inquiry")]
#[command(about = "Fill in and submit a SparklePro inquiry form from the terminal")]
pub struct CliConfig {
    #[arg(long, value_enum, help = "Which form to fill in (overrides [form] kind)")]
    pub form: Option<FormKind>,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "", help = "One of the labels printed by --list-services")]
    pub service: String,

    #[arg(long, default_value = "", help = "Details when --service \"Other Services\"")]
    pub other_service: String,

    #[arg(long, default_value = "")]
    pub message: String,

    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Force the simulated outbound action to fail")]
    pub fail: bool,

    #[arg(long, help = "Override the simulated delay in milliseconds")]
    pub delay_ms: Option<u64>,

    #[arg(long, help = "Print the available services and exit")]
    pub list_services: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON logs")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file if given and applies command-line overrides.
    pub fn form_config(&self) -> crate::utils::error::Result<FormConfig> {
        let mut config = match &self.config {
            Some(path) => FormConfig::from_file(path)?,
            None => FormConfig::default(),
        };

        if let Some(kind) = self.form {
            config.form.kind = kind;
        }
        if self.fail {
            config.outbound.fail = Some(true);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.outbound.delay_ms = Some(delay_ms);
        }

        Ok(config)
    }
}

pub mod toml_config;

use crate::core::render::OutputFormat;
use crate::core::{ConfigProvider, TechnicianQuery};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::FileConfig;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tecnicos-board")]
#[command(about = "Shows field technicians and whether they are available")]
pub struct CliConfig {
    #[arg(long, help = "Base API path [default: http://localhost:8000/api/v1]")]
    pub api_base: Option<String>,

    #[arg(long, help = "Optional TOML settings file")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, conflicts_with = "busy", help = "Only available technicians")]
    pub available: bool,

    #[arg(long, help = "Only busy technicians")]
    pub busy: bool,

    #[arg(long, help = "Only technicians with this specialty")]
    pub specialty: Option<String>,

    #[arg(long, help = "Output format: text, json or csv")]
    pub format: Option<String>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    fn availability_filter(&self) -> Option<bool> {
        match (self.available, self.busy) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Effective settings after merging the settings file with CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub query: TechnicianQuery,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            query: TechnicianQuery::default(),
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Settings {
    pub fn from_file_config(file: &FileConfig) -> Result<Self> {
        file.validate()?;
        let defaults = Settings::default();

        Ok(Self {
            api_base: file.api.base_url.clone().unwrap_or(defaults.api_base),
            query: file.query(),
            format: file.output_format()?.unwrap_or(defaults.format),
            color: file.display.color.unwrap_or(defaults.color),
        })
    }

    /// CLI flags win over the settings file.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };

        let mut settings = Self::from_file_config(&file)?;

        if let Some(api_base) = &cli.api_base {
            settings.api_base = api_base.clone();
        }
        if let Some(available) = cli.availability_filter() {
            settings.query.available = Some(available);
        }
        if let Some(specialty) = &cli.specialty {
            settings.query.specialty = Some(specialty.clone());
        }
        if let Some(format) = &cli.format {
            settings.format = format.parse()?;
        }
        if cli.no_color {
            settings.color = false;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base", &self.api_base)?;
        if let Some(specialty) = &self.query.specialty {
            validation::validate_non_empty_string("specialty", specialty)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn query(&self) -> TechnicianQuery {
        self.query.clone()
    }
}

use crate::core::render::OutputFormat;
use crate::core::TechnicianQuery;
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub filters: FilterSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSection {
    pub available: Option<bool>,
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    pub color: Option<bool>,
    pub format: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BoardError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BoardError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| BoardError::Config {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn query(&self) -> TechnicianQuery {
        TechnicianQuery {
            available: self.filters.available,
            specialty: self.filters.specialty.clone(),
        }
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.display
            .format
            .as_deref()
            .map(str::parse)
            .transpose()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.api.base_url {
            validation::validate_url("api.base_url", base_url)?;
        }
        if let Some(specialty) = &self.filters.specialty {
            validation::validate_non_empty_string("filters.specialty", specialty)?;
        }
        if let Some(format) = &self.display.format {
            validation::validate_one_of("display.format", format, &OutputFormat::NAMES)?;
        }
        Ok(())
    }
}

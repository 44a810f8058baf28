pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::FileConfig, Settings};
pub use core::{
    client::ApiClient,
    render::{Card, CardStyle, Frame, OutputFormat},
    view::{ListState, TechnicianListView},
};
pub use domain::model::{Availability, Technician, TechnicianQuery};
pub use utils::error::{BoardError, Result};

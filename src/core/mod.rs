pub mod client;
pub mod render;
pub mod view;

pub use crate::domain::model::{Availability, Technician, TechnicianQuery};
pub use crate::domain::ports::{ConfigProvider, TechnicianSource};
pub use crate::utils::error::Result;

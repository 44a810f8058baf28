use crate::domain::model::{Technician, TechnicianQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TechnicianSource: Send + Sync {
    async fn fetch_technicians(&self, query: &TechnicianQuery) -> Result<Vec<Technician>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn query(&self) -> TechnicianQuery;
}

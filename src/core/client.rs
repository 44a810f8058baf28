use crate::core::{ConfigProvider, Technician, TechnicianQuery, TechnicianSource};
use crate::utils::error::{BoardError, Result};
use reqwest::Client;
use url::Url;

const COLLECTION_PATH: &str = "tecnicos/";

/// Reads the technician collection over HTTP.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Url,
}

impl ApiClient {
    pub fn new(api_base: &str) -> Result<Self> {
        let mut base = Url::parse(api_base).map_err(|e| BoardError::InvalidConfigValue {
            field: "api_base".to_string(),
            value: api_base.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        // Url::join drops the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let endpoint = base.join(COLLECTION_PATH).map_err(|e| BoardError::Config {
            message: format!("cannot build collection URL from {}: {}", api_base, e),
        })?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_base())
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait::async_trait]
impl TechnicianSource for ApiClient {
    async fn fetch_technicians(&self, query: &TechnicianQuery) -> Result<Vec<Technician>> {
        let params = query.to_params();
        tracing::debug!("GET {} params={:?}", self.endpoint, params);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(BoardError::fetch(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let body = response.bytes().await?;
        let technicians: Vec<Technician> = serde_json::from_slice(&body)?;

        tracing::debug!("Decoded {} technicians", technicians.len());
        Ok(technicians)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_endpoint_joins_collection_path() {
        let client = ApiClient::new("http://localhost:8000/api/v1").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/api/v1/tecnicos/");

        let client = ApiClient::new("http://localhost:8000/api/v1/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/api/v1/tecnicos/");
    }

    #[test]
    fn test_rejects_invalid_base() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, BoardError::InvalidConfigValue { .. }));
    }

    #[tokio::test]
    async fn test_fetch_sends_filters() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/tecnicos/")
                .query_param("disponible", "false")
                .query_param("especialidad", "Redes");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        }).await;

        let client = ApiClient::new(&server.url("/api/v1")).unwrap();
        let query = TechnicianQuery::new().available(false).specialty("Redes");
        let technicians = client.fetch_technicians(&query).await.unwrap();

        mock.assert_async().await;
        assert!(technicians.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(GET).path("/api/v1/tecnicos/");
            then.status(503);
        }).await;

        let client = ApiClient::new(&server.url("/api/v1")).unwrap();
        let err = client
            .fetch_technicians(&TechnicianQuery::default())
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(err.is_fetch());
        assert_eq!(err.to_string(), "Request failed with status code 503");
    }

    #[tokio::test]
    async fn test_undecodable_body_is_fetch_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/api/v1/tecnicos/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "not a list"}));
        }).await;

        let client = ApiClient::new(&server.url("/api/v1")).unwrap();
        let err = client
            .fetch_technicians(&TechnicianQuery::default())
            .await
            .unwrap_err();

        assert!(err.is_fetch());
        assert!(err.to_string().contains("expected a sequence"));
    }
}

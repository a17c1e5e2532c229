//! HTTP client for the inventory API
//!
//! Thin reqwest wrapper over the three endpoints. Non-success responses are
//! turned into `ClientError::Status` carrying the server's `message`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::browser::state::SearchForm;
use crate::dto::vehicle_dto::VehicleSearchParams;
use crate::models::vehicle::{StatusPrefix, Vehicle, VehicleSummary};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Status { status: StatusCode, message: String },

    #[error("Unexpected response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The operations the browser needs from the service.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn statuses(&self) -> Result<Vec<i32>, ClientError>;

    async fn search(&self, form: &SearchForm) -> Result<Vec<VehicleSummary>, ClientError>;

    async fn vehicle(&self, id: i32) -> Result<Vehicle, ClientError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct InventoryClient {
    client: Client,
    base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(ClientError::Transport)?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or_else(|_| {
                    if text.is_empty() {
                        status.canonical_reason().unwrap_or("Request failed").to_string()
                    } else {
                        text
                    }
                });
            return Err(ClientError::Status { status, message });
        }

        response.json::<T>().await.map_err(ClientError::Decode)
    }
}

#[async_trait]
impl InventoryApi for InventoryClient {
    async fn statuses(&self) -> Result<Vec<i32>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/statuses", self.base_url))
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let rows: Vec<StatusPrefix> = Self::decode(response).await?;
        Ok(rows.into_iter().map(|row| row.value).collect())
    }

    async fn search(&self, form: &SearchForm) -> Result<Vec<VehicleSummary>, ClientError> {
        let params = VehicleSearchParams::from(form);
        let response = self
            .client
            .get(format!("{}/api/vehicles", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        Self::decode(response).await
    }

    async fn vehicle(&self, id: i32) -> Result<Vehicle, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/vehicles/{}", self.base_url, id))
            .send()
            .await
            .map_err(ClientError::Transport)?;

        Self::decode(response).await
    }
}

impl From<&SearchForm> for VehicleSearchParams {
    /// Blank form fields are left out of the query string.
    fn from(form: &SearchForm) -> Self {
        let field = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        Self {
            stock_number: field(&form.stock_number),
            vin: field(&form.vin),
            status_prefix: field(&form.status_prefix),
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use hydrosync_api::models::{Cycle, CycleConfig};
use hydrosync_api::restful::{
    ConfigPayload, DeletedCycle, ModePayload, SetTimeRequest, TimePayload,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the device answered but the body lacked the expected
    /// success marker. Callers treat this as "no data", not a fault.
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// REST surface of the irrigation controller.
#[async_trait]
pub trait DeviceApi {
    async fn fetch_time(&self) -> ApiResult<TimePayload>;
    async fn store_time(&self, request: &SetTimeRequest) -> ApiResult<TimePayload>;
    async fn fetch_config(&self) -> ApiResult<ConfigPayload>;
    async fn store_mode(&self, request: &ModePayload) -> ApiResult<ModePayload>;
    async fn create_cycle(&self, config: &CycleConfig) -> ApiResult<Cycle>;
    async fn update_cycle(&self, cycle: &Cycle) -> ApiResult<Cycle>;
    async fn delete_cycle(&self, id: &str) -> ApiResult<DeletedCycle>;
}

/// [`DeviceApi`] over HTTP against the controller's dashboard server.
pub struct HttpDevice {
    client: Client,
    base_url: String,
}

impl HttpDevice {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        Self::decode(path, "GET", response).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let label = method.as_str().to_owned();
        let response = self
            .client
            .request(method, format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::decode(path, &label, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        method: &str,
        response: Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("[{path}] - {method} - FAIL: {status}");
            return Err(ApiError::Status(status));
        }

        let bytes = response.bytes().await?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                tracing::debug!("[{path}] - {method} - SUCCESS");
                Ok(value)
            }
            Err(err) => {
                tracing::warn!("[{path}] - {method} - FAIL: {err}");
                Err(ApiError::Decode(err))
            }
        }
    }
}

#[async_trait]
impl DeviceApi for HttpDevice {
    async fn fetch_time(&self) -> ApiResult<TimePayload> {
        self.get("/time").await
    }

    async fn store_time(&self, request: &SetTimeRequest) -> ApiResult<TimePayload> {
        self.send(Method::POST, "/time", request).await
    }

    async fn fetch_config(&self) -> ApiResult<ConfigPayload> {
        self.get("/config").await
    }

    async fn store_mode(&self, request: &ModePayload) -> ApiResult<ModePayload> {
        self.send(Method::POST, "/mode", request).await
    }

    async fn create_cycle(&self, config: &CycleConfig) -> ApiResult<Cycle> {
        self.send(Method::POST, "/cycles", config).await
    }

    async fn update_cycle(&self, cycle: &Cycle) -> ApiResult<Cycle> {
        self.send(Method::PUT, "/cycles", cycle).await
    }

    async fn delete_cycle(&self, id: &str) -> ApiResult<DeletedCycle> {
        let response = self
            .client
            .delete(format!("{}/cycles", self.base_url))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::decode("/cycles", "DELETE", response).await
    }
}

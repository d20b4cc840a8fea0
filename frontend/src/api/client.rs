use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_hooks::{register_mock, MockResponse, TestResponder};

/// The two backends the portal talks to. They are deployed separately and
/// each gets its own base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiService {
    Employee,
    Hr,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    service: ApiService,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new(service: ApiService) -> Self {
        Self {
            client: Client::new(),
            service,
            base_url: None,
        }
    }

    pub fn new_with_base_url(service: ApiService, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            service,
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url(self.service).await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(response) = mock_hooks::respond(&request)? {
            return Ok(response);
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }
}

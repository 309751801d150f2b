//! HTTP client for the Storefox REST API.
//!
//! Wraps `reqwest` with bearer authentication, status checking and typed
//! response decoding. Non-2xx statuses surface as
//! [`ClientError::UnexpectedStatus`]; application-level outcomes carried in a
//! 2xx body are returned as values, not errors.

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use storefox_core::AppConfig;

use crate::error::ClientError;
use crate::types::{
    CreateOutcome, CreateStoreRequest, CreateStoreResponse, DeviceInfoResponse, MappingReply,
    StoreListResponse,
};

const LIST_STORES_PATH: &str = "getAllStoresByTenantId";
const CREATE_STORE_PATH: &str = "createStore";
const UPDATE_DEVICE_INFO_PATH: &str = "conversations/updateDeviceInfo";

/// Client for the Storefox REST API.
///
/// Use [`StorefoxClient::from_config`] in the binary or
/// [`StorefoxClient::new`] to point at a mock server in tests.
pub struct StorefoxClient {
    client: Client,
    base_url: Url,
}

impl StorefoxClient {
    /// Creates a client rooted at `base_url` (including any version prefix).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends endpoint paths
        // below the version prefix instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`StorefoxClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Lists every store belonging to `tenant_id`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body does not match the envelope.
    pub async fn list_stores(
        &self,
        tenant_id: i64,
        token: &str,
    ) -> Result<StoreListResponse, ClientError> {
        let tenant = tenant_id.to_string();
        let url = self.endpoint(LIST_STORES_PATH, &[("tenantId", tenant.as_str())])?;
        let request = self.client.get(url.clone()).bearer_auth(token);
        Self::send_json(request, &url, &format!("{LIST_STORES_PATH}(tenantId={tenant_id})"))
            .await
    }

    /// Creates a store.
    ///
    /// Returns [`CreateOutcome::Rejected`] when the server answers
    /// `success: false`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body does not match the envelope.
    /// - [`ClientError::MissingField`] if `success` is true but the `store`
    ///   object is absent.
    pub async fn create_store(
        &self,
        payload: &CreateStoreRequest<'_>,
        token: &str,
    ) -> Result<CreateOutcome, ClientError> {
        let url = self.endpoint(CREATE_STORE_PATH, &[])?;
        let request = self
            .client
            .request(Method::POST, url.clone())
            .bearer_auth(token)
            .json(payload);
        let body: CreateStoreResponse = Self::send_json(request, &url, CREATE_STORE_PATH).await?;

        if !body.success {
            return Ok(CreateOutcome::Rejected);
        }

        let store = body.store.ok_or_else(|| ClientError::MissingField {
            context: CREATE_STORE_PATH.to_string(),
            field: "store",
        })?;

        let inserted_id = match store.inserted_id {
            Some(id) if !id.is_null() => crate::types::render_json_text(&id),
            _ => {
                tracing::warn!("createStore succeeded without store.insertedId");
                String::new()
            }
        };

        Ok(CreateOutcome::Created { inserted_id })
    }

    /// Asks the service to (re)associate a device with its store.
    ///
    /// With `device_id` of `None` or `""` the request carries no query
    /// filter. The body is always an empty JSON object.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    ///
    /// A 2xx reply whose body is empty or not a JSON object decodes as an
    /// empty envelope and so yields [`MappingReply::Rejected`].
    pub async fn update_device_info(
        &self,
        device_id: Option<&str>,
        token: &str,
    ) -> Result<MappingReply, ClientError> {
        let url = self.device_info_url(device_id)?;
        let request = self
            .client
            .request(Method::POST, url.clone())
            .bearer_auth(token)
            .json(&serde_json::json!({}));
        let raw = Self::send_checked(request, &url).await?;
        let body = serde_json::from_str::<DeviceInfoResponse>(&raw).unwrap_or_else(|e| {
            tracing::warn!(url = %url, error = %e, "updateDeviceInfo reply is not a JSON object");
            DeviceInfoResponse::default()
        });
        Ok(MappingReply::from(body))
    }

    pub(crate) fn device_info_url(&self, device_id: Option<&str>) -> Result<Url, ClientError> {
        match device_id.filter(|id| !id.is_empty()) {
            Some(id) => self.endpoint(UPDATE_DEVICE_INFO_PATH, &[("deviceId", id)]),
            None => self.endpoint(UPDATE_DEVICE_INFO_PATH, &[]),
        }
    }

    /// Joins `path` onto the base URL and appends percent-encoded query
    /// parameters. No `?` is emitted when `query` is empty.
    pub(crate) fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends the request, asserts a 2xx status, and decodes the body.
    async fn send_json<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
        url: &Url,
        context: &str,
    ) -> Result<T, ClientError> {
        let body = Self::send_checked(request, url).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Sends the request, asserts a 2xx status, and returns the raw body.
    async fn send_checked(
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "storefox api response");

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

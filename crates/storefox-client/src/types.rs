//! Storefox API request and response types.
//!
//! Response bodies are decoded into these types before any field is read.
//! Application-level outcomes are then lifted into [`CreateOutcome`] and
//! [`MappingReply`] so callers never inspect raw JSON.

use serde::{Deserialize, Serialize};
use storefox_core::FormData;

// ---------------------------------------------------------------------------
// getAllStoresByTenantId
// ---------------------------------------------------------------------------

/// Envelope: `{ "success": bool, "data": { "stores": [...] } }`.
#[derive(Debug, Deserialize)]
pub struct StoreListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<StoreListData>,
}

#[derive(Debug, Deserialize)]
pub struct StoreListData {
    /// Kept as raw JSON: only the length matters, and a non-array value is
    /// treated the same as a missing list.
    #[serde(default)]
    pub stores: Option<serde_json::Value>,
}

impl StoreListResponse {
    /// Number of stores in `data.stores`, or `None` if the list is absent or
    /// not an array.
    #[must_use]
    pub fn store_count(&self) -> Option<usize> {
        self.data
            .as_ref()
            .and_then(|d| d.stores.as_ref())
            .and_then(serde_json::Value::as_array)
            .map(Vec::len)
    }
}

// ---------------------------------------------------------------------------
// createStore
// ---------------------------------------------------------------------------

/// Body of `POST createStore`. The bearer token never travels in the body.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CreateStoreRequest<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub region: &'a str,
    pub store_id: &'a str,
    #[serde(rename = "tenantId")]
    pub tenant_id: i64,
    #[serde(rename = "deviceId")]
    pub device_id: &'a str,
}

impl<'a> From<&'a FormData> for CreateStoreRequest<'a> {
    fn from(form: &'a FormData) -> Self {
        Self {
            name: &form.name,
            city: &form.city,
            region: &form.region,
            store_id: &form.store_id,
            tenant_id: form.tenant_id,
            device_id: &form.device_id,
        }
    }
}

/// Envelope: `{ "success": bool, "store": { "insertedId": ... } }`.
#[derive(Debug, Deserialize)]
pub struct CreateStoreResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub store: Option<CreatedStore>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedStore {
    #[serde(rename = "insertedId", default)]
    pub inserted_id: Option<serde_json::Value>,
}

/// Application-level result of `createStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// `inserted_id` is empty when the server omitted it.
    Created { inserted_id: String },
    Rejected,
}

// ---------------------------------------------------------------------------
// conversations/updateDeviceInfo
// ---------------------------------------------------------------------------

/// Envelope: `{ "success": "ok" | other, "data": message }`.
///
/// `success` is a string here, unlike the boolean used by the store
/// endpoints, so both fields stay untyped until classified.
#[derive(Debug, Default, Deserialize)]
pub struct DeviceInfoResponse {
    #[serde(default)]
    pub success: serde_json::Value,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Application-level result of `updateDeviceInfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingReply {
    Updated { message: String },
    /// Any `success` value other than the string `"ok"`, rendered as JSON.
    Rejected { indicator: String },
}

impl From<DeviceInfoResponse> for MappingReply {
    fn from(response: DeviceInfoResponse) -> Self {
        if response.success.as_str() == Some("ok") {
            MappingReply::Updated {
                message: render_json_text(&response.data),
            }
        } else {
            MappingReply::Rejected {
                indicator: response.success.to_string(),
            }
        }
    }
}

/// Render a JSON value as display text: strings without quotes, `null` as
/// empty, everything else as compact JSON.
#[must_use]
pub fn render_json_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

//! Device mapping: ask the service to (re)associate a device with its store.

use storefox_core::{Notification, Notifier, PageState};

use crate::client::StorefoxClient;
use crate::types::MappingReply;

pub const MAPPING_FAILURE_MESSAGE: &str = "An error occurred while updating devices.";

const MAPPING_UPDATED: &str = "Device mapping updated successfully!";
const MAPPING_ERROR: &str = "Error during device mapping.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingOutcome {
    /// The service answered `success: "ok"`.
    Updated,
    /// The service answered with any other indicator.
    Rejected,
    /// Transport, HTTP or decoding failure; no message was recorded.
    Failed,
}

/// Run the device mapping with the inputs held in `page.mapping`.
///
/// Only touches `page.mapping_message`, and only when the service replied
/// with a decodable body.
pub async fn run_device_mapping(
    client: &StorefoxClient,
    notifier: &dyn Notifier,
    page: &mut PageState,
) -> MappingOutcome {
    let device_id = page.mapping.device_id.as_str();
    tracing::debug!(device_id, "running device mapping");

    match client
        .update_device_info(Some(device_id), &page.mapping.token)
        .await
    {
        Ok(MappingReply::Updated { message }) => {
            tracing::info!(device_id, %message, "device mapping updated");
            notifier.notify(Notification::success(MAPPING_UPDATED).with_detail(message.clone()));
            page.mapping_message = Some(message);
            MappingOutcome::Updated
        }
        Ok(MappingReply::Rejected { indicator }) => {
            tracing::warn!(device_id, %indicator, "updateDeviceInfo did not answer ok");
            page.mapping_message = Some(MAPPING_FAILURE_MESSAGE.to_string());
            notifier.notify(Notification::error(MAPPING_FAILURE_MESSAGE));
            MappingOutcome::Rejected
        }
        Err(e) => {
            tracing::warn!(device_id, error = %e, "device mapping failed");
            notifier.notify(Notification::error(MAPPING_ERROR));
            MappingOutcome::Failed
        }
    }
}

//! Store creation: count the tenant's stores, derive the next store id, then
//! create the store.

use storefox_core::{FormData, Notification, Notifier, PageState};

use crate::client::StorefoxClient;
use crate::types::{CreateOutcome, CreateStoreRequest};

pub const STORE_CREATED_CONFIRMATION: &str = "Store created successfully";

const COUNT_FETCHED: &str = "Store count fetched successfully!";
const COUNT_FAILED: &str = "Error fetching store count.";
const CREATE_FAILED: &str = "An error occurred while creating the store.";

/// Result of the count step.
///
/// `count` is already the next store number on the success path. On a
/// transport failure it is the raw sentinel `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountStep {
    pub success: bool,
    pub count: i64,
}

/// Fetch the tenant's store count.
///
/// An empty, missing or non-array `stores` list counts as `-1`, so the
/// returned next number is `0` in that case. The success notification fires
/// whenever a body was decoded, whatever the count.
pub async fn fetch_store_count(
    client: &StorefoxClient,
    notifier: &dyn Notifier,
    tenant_id: i64,
    token: &str,
) -> CountStep {
    match client.list_stores(tenant_id, token).await {
        Ok(body) => {
            let count = body
                .store_count()
                .filter(|n| *n > 0)
                .and_then(|n| i64::try_from(n).ok())
                .unwrap_or(-1);
            tracing::debug!(tenant_id, count, success = body.success, "store count fetched");
            if count < 0 {
                tracing::warn!(tenant_id, "store list empty or missing; using sentinel count");
            }

            notifier.notify(Notification::success(COUNT_FETCHED));

            CountStep {
                success: body.success,
                count: count + 1,
            }
        }
        Err(e) => {
            tracing::warn!(tenant_id, error = %e, "failed to fetch store count");
            notifier.notify(Notification::error(COUNT_FAILED));
            CountStep {
                success: false,
                count: -1,
            }
        }
    }
}

/// Create a store from `form`. Returns `true` only on a confirmed creation.
pub async fn create_store(
    client: &StorefoxClient,
    notifier: &dyn Notifier,
    form: &FormData,
) -> bool {
    let payload = CreateStoreRequest::from(form);
    tracing::debug!(?payload, "creating store");

    match client.create_store(&payload, &form.token).await {
        Ok(CreateOutcome::Created { inserted_id }) => {
            tracing::info!(%inserted_id, store_id = %form.store_id, "store created");
            notifier.notify(Notification::success(format!(
                "Store created successfully with ID: {inserted_id}"
            )));
            true
        }
        Ok(CreateOutcome::Rejected) => {
            tracing::warn!(store_id = %form.store_id, "createStore answered success=false");
            notifier.notify(Notification::error(CREATE_FAILED));
            false
        }
        Err(e) => {
            tracing::warn!(store_id = %form.store_id, error = %e, "failed to create store");
            notifier.notify(Notification::error(CREATE_FAILED));
            false
        }
    }
}

/// Submit the store form held by `page`.
///
/// `page.form.store_id` is overwritten with the derived count before anything
/// else happens, even when the count step failed. The create call is only
/// made when the count step reported success.
pub async fn submit_store(
    client: &StorefoxClient,
    notifier: &dyn Notifier,
    page: &mut PageState,
) -> bool {
    let CountStep { success, count } =
        fetch_store_count(client, notifier, page.form.tenant_id, &page.form.token).await;

    page.form.store_id = count.to_string();
    tracing::debug!(store_id = %page.form.store_id, success, "derived store id");

    if !success {
        return false;
    }

    let created = create_store(client, notifier, &page.form).await;
    if created {
        page.confirmation_message = Some(STORE_CREATED_CONFIRMATION.to_string());
    }
    created
}

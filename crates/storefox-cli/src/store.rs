//! Store command handlers for the CLI.
//!
//! `store create` fills a fresh page through field-keyed updates, then runs
//! the creation workflow. Workflow failures are reported through the console
//! notifier and do not change the exit status.

use clap::{Args, Subcommand};
use storefox_client::{submit_store, StorefoxClient};
use storefox_core::{try_parse_tenant_id, AppConfig, PageState};

use crate::console::ConsoleNotifier;

/// Sub-commands available under `store`.
#[derive(Debug, Subcommand)]
pub enum StoreCommands {
    /// Create a store; its store id is derived from the tenant's store count
    Create(CreateStoreArgs),
}

#[derive(Debug, Args)]
pub struct CreateStoreArgs {
    /// Store name
    #[arg(long)]
    pub name: String,
    /// City
    #[arg(long)]
    pub city: String,
    /// Region (optional)
    #[arg(long, default_value = "")]
    pub region: String,
    /// Tenant ID; text without a leading integer is sent as 0
    #[arg(long, allow_hyphen_values = true)]
    pub tenant_id: String,
    /// Device ID to attach to the new store
    #[arg(long)]
    pub device_id: String,
    /// Bearer token (defaults to STOREFOX_TOKEN)
    #[arg(long)]
    pub token: Option<String>,
}

/// Build the page state for a `store create` invocation.
///
/// # Errors
///
/// Returns an error if no token was passed and `STOREFOX_TOKEN` is unset.
pub(crate) fn page_from_args(
    config: &AppConfig,
    args: &CreateStoreArgs,
) -> anyhow::Result<PageState> {
    let token = args
        .token
        .as_deref()
        .or(config.token.as_deref())
        .ok_or_else(|| anyhow::anyhow!("no token: pass --token or set STOREFOX_TOKEN"))?;

    let mut page = PageState::new();
    for (field, value) in [
        ("name", args.name.as_str()),
        ("city", args.city.as_str()),
        ("region", args.region.as_str()),
        ("tenantId", args.tenant_id.as_str()),
        ("deviceId", args.device_id.as_str()),
        ("token", token),
    ] {
        page.form.set_field(field, value)?;
    }
    Ok(page)
}

/// True when `raw` has no leading integer and the form falls back to 0.
pub(crate) fn tenant_id_was_coerced(raw: &str) -> bool {
    try_parse_tenant_id(raw).is_none()
}

/// Run the store creation workflow against the configured API.
///
/// # Errors
///
/// Returns an error if the token is missing or the HTTP client cannot be
/// built. API failures are reported through the notifier, not returned.
pub(crate) async fn run_store_create(
    config: &AppConfig,
    args: &CreateStoreArgs,
) -> anyhow::Result<()> {
    let mut page = page_from_args(config, args)?;
    if tenant_id_was_coerced(&args.tenant_id) {
        tracing::warn!(raw = %args.tenant_id, "tenant id is not an integer; using 0");
    }

    let client = StorefoxClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build Storefox client: {e}"))?;

    let created = submit_store(&client, &ConsoleNotifier, &mut page).await;
    tracing::info!(
        created,
        tenant_id = page.form.tenant_id,
        store_id = %page.form.store_id,
        "store create finished"
    );

    if let Some(message) = &page.confirmation_message {
        println!("{message} (store_id {})", page.form.store_id);
    }
    Ok(())
}

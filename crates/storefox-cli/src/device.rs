//! Device mapping command handler for the CLI.

use clap::Subcommand;
use storefox_client::{run_device_mapping, StorefoxClient};
use storefox_core::{AppConfig, PageState};

use crate::console::ConsoleNotifier;

/// Sub-commands available under `device`.
#[derive(Debug, Subcommand)]
pub enum DeviceCommands {
    /// Re-map a device (or every device, when omitted) to its store
    Map {
        /// Device ID to map; omit to let the service pick
        #[arg(long)]
        device_id: Option<String>,
        /// Bearer token (defaults to STOREFOX_MAPPING_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },
}

pub(crate) fn page_for_mapping(
    config: &AppConfig,
    device_id: Option<&str>,
    token: Option<&str>,
) -> PageState {
    let mut page = PageState::new();
    if let Some(id) = device_id {
        page.mapping.device_id = id.to_string();
    }
    match token.or(config.mapping_token.as_deref()) {
        Some(t) => page.mapping.token = t.to_string(),
        None => tracing::warn!("no mapping token; sending an empty bearer credential"),
    }
    page
}

/// Run the device mapping workflow against the configured API.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built.
pub(crate) async fn run_device_map(
    config: &AppConfig,
    device_id: Option<&str>,
    token: Option<&str>,
) -> anyhow::Result<()> {
    let mut page = page_for_mapping(config, device_id, token);

    let client = StorefoxClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build Storefox client: {e}"))?;

    let outcome = run_device_mapping(&client, &ConsoleNotifier, &mut page).await;
    tracing::info!(?outcome, "device map finished");

    if let Some(message) = &page.mapping_message {
        println!("{message}");
    }
    Ok(())
}

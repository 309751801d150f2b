mod console;
mod device;
mod store;

use clap::{CommandFactory, Parser, Subcommand};
use storefox_core::{Notification, Notifier};
use tracing_subscriber::EnvFilter;

use crate::console::ConsoleNotifier;
use crate::device::DeviceCommands;
use crate::store::StoreCommands;

#[derive(Debug, Parser)]
#[command(name = "storefox")]
#[command(about = "Storefox store provisioning console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Store provisioning
    Store {
        #[command(subcommand)]
        command: StoreCommands,
    },
    /// Device-to-store mapping
    Device {
        #[command(subcommand)]
        command: DeviceCommands,
    },
    /// Notification output checks
    Notify {
        #[command(subcommand)]
        command: NotifyCommands,
    },
}

#[derive(Debug, Subcommand)]
enum NotifyCommands {
    /// Print a test notification
    Test,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = storefox_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Store {
            command: StoreCommands::Create(args),
        }) => store::run_store_create(&config, &args).await?,
        Some(Commands::Device {
            command: DeviceCommands::Map { device_id, token },
        }) => device::run_device_map(&config, device_id.as_deref(), token.as_deref()).await?,
        Some(Commands::Notify {
            command: NotifyCommands::Test,
        }) => ConsoleNotifier.notify(Notification::info("This is a test notification!")),
        None => Cli::command().print_help()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;

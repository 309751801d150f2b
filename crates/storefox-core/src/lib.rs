pub mod app_config;
pub mod config;
pub mod form;
pub mod notify;
pub mod page;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_API_BASE_URL};
pub use form::{parse_tenant_id, try_parse_tenant_id, FormData, FormError, FormField, MappingForm};
pub use notify::{Notification, NotificationLevel, Notifier, RecordingNotifier};
pub use page::PageState;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

//! Operator workflows built on [`StorefoxClient`](crate::StorefoxClient).
//!
//! Each workflow catches every client error locally, logs it, and reports it
//! through the injected [`Notifier`](storefox_core::Notifier). Nothing is
//! retried and nothing propagates to the caller.

pub mod mapping;
pub mod store;

pub use mapping::{run_device_mapping, MappingOutcome, MAPPING_FAILURE_MESSAGE};
pub use store::{
    create_store, fetch_store_count, submit_store, CountStep, STORE_CREATED_CONFIRMATION,
};

pub mod client;
pub mod error;
pub mod types;
pub mod workflow;

pub use client::StorefoxClient;
pub use error::ClientError;
pub use types::{CreateOutcome, CreateStoreRequest, MappingReply, StoreListResponse};
pub use workflow::{
    create_store, fetch_store_count, run_device_mapping, submit_store, CountStep,
    MappingOutcome, MAPPING_FAILURE_MESSAGE, STORE_CREATED_CONFIRMATION,
};

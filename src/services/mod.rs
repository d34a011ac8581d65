//! External Services
//!
//! Background tasks that talk to the sync service:
//! - api: Request worker executing status and control calls
//! - poller: Repeating timer that requests a fresh status

pub mod api;
pub mod poller;

// Re-export commonly used types for convenience
pub use api::{spawn_api_service, ApiRequest, ApiResponse};
pub use poller::StatusPoller;

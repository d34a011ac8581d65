//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: API responses from the background worker
//! - keyboard: User keyboard input
//!
//! Handlers take `&mut App` and update the model in place.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;

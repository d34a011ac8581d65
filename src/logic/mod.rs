//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a server:
//! - errors: Error classification and user-facing messages
//! - sequence: Request tokens for discarding stale status responses
//! - status: Mapping a status snapshot onto labels, colors and controls
//! - ui: Toast timing

pub mod errors;
pub mod sequence;
pub mod status;
pub mod ui;

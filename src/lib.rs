//! syncpanel: terminal status poller and control panel for a sync job service
//!
//! The panel polls `GET /sync/status` on a fixed interval, renders the job's
//! state, and relays start/stop commands to `POST /sync` and `POST /sync/stop`.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;

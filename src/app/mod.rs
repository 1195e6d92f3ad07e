//! Application module structure for AdvisorApp
//!
//! - `core`: AdvisorApp struct, initialization, submit/dispatch helpers
//! - `events`: event processing from the backend
//! - `update`: main update loop and panel rendering

pub mod core;
pub mod events;
pub mod update;

pub use core::AdvisorApp;

//! Advisor Client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod config;
pub mod events;
pub mod links;
pub mod protocol;
pub mod session;
pub mod transcript;
pub mod typewriter;
pub mod ui;

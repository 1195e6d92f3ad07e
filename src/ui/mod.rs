//! UI rendering modules for the advisor client.
//!
//! - `chat`: transcript bubbles, reveal controls, error banner
//! - `markdown`: styled-span parsing and rendering of reply text
//! - `preview`: listing preview cards and value formatting
//! - `theme`: light/dark color schemes

pub mod chat;
pub mod markdown;
pub mod preview;
pub mod theme;

pub use chat::render_transcript;
pub use preview::{format_area, format_price};
pub use theme::AdvisorTheme;

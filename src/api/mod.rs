//! API module
//!
//! Contains HTTP request handlers for the font store endpoints

pub mod fonts;
pub mod routes_info;

// Re-export handlers for convenience (used by app.rs)
pub use fonts::*;
pub use routes_info::routes_info;

//! Font Store Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod services;
/// Application state shared across handlers
pub mod state;
pub mod storage;

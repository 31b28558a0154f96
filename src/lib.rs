//! AGYAL - multi-profile fixed-income investment dashboard (TUI Edition)
//!
//! Session and navigation core, role-specific dashboards, and the
//! terminal shell that renders them.

pub mod config;
pub mod core;
pub mod error;
pub mod seed;
pub mod tui;

pub use error::AppError;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Input/output surface of the crate
//!
//! Command-line parsing, configuration defaults, error types, progress
//! display, and map export.

/// Command-line interface and run orchestration
pub mod cli;
/// Growth constants and configuration defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Top-down city map export
pub mod image;
/// Progress display for growth runs
pub mod progress;

//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration inspection (path, show)
//! - [`emit`] - Emit a message with a semantic intent
//! - [`remind`] - Deadline-gated reminder

pub mod config;
pub mod emit;
pub mod remind;

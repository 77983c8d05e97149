//! Core types for the MCP server core.
//!
//! This module provides the foundational types shared with the host server:
//! - **Errors**: validation error type with thiserror derives
//! - **Settings**: the startup configuration model resolved from the
//!   environment (or an explicit override map)

mod errors;
mod settings;

pub use errors::{Error, Result};
pub use settings::{alias, McpSettings};

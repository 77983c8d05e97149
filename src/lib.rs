//! # OpenBB MCP Core - Curated Tool Surface & Settings
//!
//! Filtering and configuration core for the OpenBB MCP server:
//! - Immutable allow-list of curated OpenBB tool identifiers with an exact
//!   membership check
//! - Startup settings model with environment aliases, defaulting, and
//!   list-value normalization
//!
//! The MCP transport, tool dispatch, and the OpenBB provider API live in the
//! host server. At startup the host enumerates every REST endpoint, registers
//! the ones [`is_curated_tool`] admits, and reads [`McpSettings`] for server
//! identity and response verbosity. Everything here is synchronous,
//! in-memory, and I/O-free; once constructed, both the registry and the
//! settings are read-only for the life of the process.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use tools::{curated_tool_count, curated_tool_names, is_curated_tool, tool_category};
pub use types::{Error, McpSettings, Result};

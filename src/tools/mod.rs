//! Tool surface curation.
//!
//! The host server enumerates every OpenBB REST endpoint at startup and asks
//! this module which of them to register as invocable MCP tools. Curation is
//! a build-time decision; there is no runtime registration surface.

pub mod curated;

pub use curated::{curated_tool_count, curated_tool_names, is_curated_tool, tool_category};

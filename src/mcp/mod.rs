//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes tsctl functionality to AI
//! assistants. The server speaks MCP over stdio and offers catalog scans and
//! string lookups as tools.
//!
//! ## Module Structure
//!
//! - `helpers`: Context loading, pagination and JSON result helpers
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod helpers;
mod server;
pub mod types;

pub use server::{TsctlMcpServer, run_server};

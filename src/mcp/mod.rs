//! MCP (Model Context Protocol) module
//!
//! JSON-RPC over stdio, exposing the `get_vehicle_info` tool.

pub mod server;
pub mod tools;
pub mod types;

//! VIN Decoder MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing a single tool that decodes
//! Vehicle Identification Numbers via the NHTSA vPIC API.

pub mod config;
pub mod error;
pub mod mcp;
pub mod vpic;

pub use config::Config;
pub use error::{DecodeError, Result, VinMcpError};
pub use vpic::client::VinDecoder;
pub use vpic::types::DecodeResult;

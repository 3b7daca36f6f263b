//! MCP Tool definitions and handlers
//!
//! Defines the `get_vehicle_info` tool and its implementation.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::DecodeError;
use crate::mcp::types::{CallToolResult, Tool};
use crate::vpic::client::VinDecoder;
use crate::vpic::transport::{HttpTransport, ReqwestTransport};
use crate::vpic::types::DecodeResult;

/// Name of the single exposed tool
pub const GET_VEHICLE_INFO: &str = "get_vehicle_info";

/// Tool handler
pub struct ToolHandler<T: HttpTransport = ReqwestTransport> {
    decoder: Arc<VinDecoder<T>>,
}

impl<T: HttpTransport> ToolHandler<T> {
    /// Create a new tool handler
    pub fn new(decoder: Arc<VinDecoder<T>>) -> Self {
        Self { decoder }
    }

    /// List all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![tool_def(
            GET_VEHICLE_INFO,
            "Get vehicle information by VIN number from the NHTSA vPIC database",
            get_vehicle_info_schema(),
        )]
    }

    /// Call a tool by name
    pub async fn call_tool(&self, name: &str, args: Value) -> CallToolResult {
        match name {
            GET_VEHICLE_INFO => CallToolResult::envelope(&self.get_vehicle_info(args).await),
            _ => CallToolResult::error(format!("Unknown tool: {}", name)),
        }
    }

    /// Validate the `vin` argument and decode it.
    ///
    /// A missing or empty VIN short-circuits without touching the decoder.
    pub async fn get_vehicle_info(&self, args: Value) -> DecodeResult {
        #[derive(Deserialize)]
        struct Args {
            #[serde(default)]
            vin: Option<String>,
        }

        let args = if args.is_null() { json!({}) } else { args };
        let args: Args = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => {
                return DecodeResult::failure(
                    None,
                    DecodeError::InvalidInput {
                        message: format!("Invalid arguments: {}", e),
                    },
                )
            }
        };

        match args.vin {
            Some(vin) if !vin.trim().is_empty() => self.decoder.decode(&vin).await,
            vin => {
                tracing::debug!("get_vehicle_info called without a VIN");
                DecodeResult::failure(vin, DecodeError::vin_required())
            }
        }
    }
}

fn tool_def(name: &str, description: &str, input_schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema,
    }
}

fn get_vehicle_info_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "vin": {
                "type": "string",
                "description": "The Vehicle Identification Number to look up"
            }
        },
        "required": ["vin"]
    })
}

//! MCP Server implementation
//!
//! Implements the Model Context Protocol server for stdio transport.

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::mcp::tools::ToolHandler;
use crate::mcp::types::*;
use crate::vpic::client::VinDecoder;
use crate::vpic::transport::{HttpTransport, ReqwestTransport};

/// MCP Server info
const SERVER_NAME: &str = "vin-decoder";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for VIN decoding
pub struct McpServer<T: HttpTransport = ReqwestTransport> {
    /// Tool handler
    tool_handler: ToolHandler<T>,

    /// Whether initialized
    initialized: bool,
}

impl<T: HttpTransport> McpServer<T> {
    /// Create a new MCP server
    pub fn new(decoder: Arc<VinDecoder<T>>) -> Self {
        Self {
            tool_handler: ToolHandler::new(decoder),
            initialized: false,
        }
    }

    /// Whether the client has sent `notifications/initialized`
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the server on stdio
    pub async fn run_stdio(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();

        tracing::info!("VIN decoder MCP server listening on stdio");
        self.serve(stdin.lock(), stdout.lock()).await?;
        tracing::info!("stdin closed, shutting down");

        Ok(())
    }

    /// Serve newline-delimited JSON-RPC messages until `reader` hits EOF
    pub async fn serve<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_message(&line).await {
                Ok(Some(response)) => {
                    let response_str = serde_json::to_string(&response)?;
                    writeln!(writer, "{}", response_str)?;
                    writer.flush()?;
                }
                Ok(None) => {
                    // Notification, no response needed
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error handling message");
                }
            }
        }

        Ok(())
    }

    /// Handle an incoming JSON-RPC message
    pub async fn handle_message(&mut self, message: &str) -> Result<Option<JsonRpcResponse>> {
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable JSON-RPC message");
                return Ok(Some(JsonRpcResponse::error(
                    RequestId::Number(0),
                    JsonRpcError::parse_error(e.to_string()),
                )));
            }
        };

        tracing::debug!(method = %request.method, "Received request");

        let id = match request.id.clone() {
            Some(id) => id,
            None => {
                if request.method == methods::INITIALIZED {
                    self.initialized = true;
                } else {
                    tracing::debug!(method = %request.method, "Ignoring notification");
                }
                return Ok(None);
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Ok(Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request(format!(
                    "Unsupported JSON-RPC version: {}",
                    request.jsonrpc
                )),
            )));
        }

        match request.method.as_str() {
            methods::INITIALIZE => {
                let result = self.handle_initialize()?;
                Ok(Some(JsonRpcResponse::success(id, result)))
            }
            methods::PING => Ok(Some(JsonRpcResponse::success(id, serde_json::json!({})))),
            methods::LIST_TOOLS => {
                let result = self.handle_list_tools()?;
                Ok(Some(JsonRpcResponse::success(id, result)))
            }
            methods::CALL_TOOL => match self.handle_call_tool(&request).await {
                Ok(result) => Ok(Some(JsonRpcResponse::success(id, result))),
                Err(e) => Ok(Some(JsonRpcResponse::error(
                    id,
                    JsonRpcError::internal_error(e.to_string()),
                ))),
            },
            _ => Ok(Some(JsonRpcResponse::error(
                id,
                JsonRpcError::method_not_found(&request.method),
            ))),
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self) -> Result<Value> {
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
            },
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle list tools request
    fn handle_list_tools(&self) -> Result<Value> {
        let result = ListToolsResult {
            tools: self.tool_handler.list_tools(),
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle call tool request
    async fn handle_call_tool(&self, request: &JsonRpcRequest) -> Result<Value> {
        let params: CallToolParams = match request.params.as_ref() {
            Some(p) => match serde_json::from_value(p.clone()) {
                Ok(params) => params,
                Err(e) => {
                    return Ok(serde_json::to_value(CallToolResult::error(format!(
                        "Invalid tool parameters: {}",
                        e
                    )))?);
                }
            },
            None => {
                return Ok(serde_json::to_value(CallToolResult::error(
                    "Missing tool parameters",
                ))?);
            }
        };

        tracing::info!(tool = %params.name, "Calling tool");
        let result = self
            .tool_handler
            .call_tool(&params.name, params.arguments)
            .await;

        Ok(serde_json::to_value(result)?)
    }
}

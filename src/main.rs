//! VIN Decoder MCP Server
//!
//! A Model Context Protocol (MCP) server that decodes Vehicle Identification
//! Numbers via the NHTSA vPIC API.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use vin_decoder_mcp::config::Config;
use vin_decoder_mcp::error::Result;
use vin_decoder_mcp::mcp::server::McpServer;
use vin_decoder_mcp::vpic::client::VinDecoder;

/// VIN Decoder MCP Server
#[derive(Parser)]
#[command(name = "vin-decoder-mcp")]
#[command(author, version, about = "VIN Decoder MCP Server - decode VINs via the NHTSA vPIC API")]
struct Cli {
    /// Override the vPIC API base URL
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a single VIN and print the result envelope
    Decode {
        /// Vehicle Identification Number
        vin: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries MCP messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.api_base_url)?;
    let decoder = Arc::new(VinDecoder::with_reqwest(config));

    match cli.command {
        Some(Commands::Decode { vin }) => {
            let result = decoder.decode(&vin).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.is_success() {
                std::process::exit(1);
            }
        }
        None => {
            let mut server = McpServer::new(decoder);
            server.run_stdio().await?;
        }
    }

    Ok(())
}

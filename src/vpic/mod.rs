//! NHTSA vPIC API module
//!
//! Contains types, transport, and client for decoding VINs against vPIC.

pub mod client;
pub mod transport;
pub mod types;

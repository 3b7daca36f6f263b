//! vPIC API type definitions
//!
//! Result rows as returned by the decode endpoint, and the decode envelope
//! handed back to tool callers.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::DecodeError;

/// One row of the upstream `Results` list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRow {
    /// Attribute name, e.g. "Make" or "Model Year"
    #[serde(rename = "Variable")]
    pub variable: String,

    /// Attribute value; null when the API has no data
    #[serde(rename = "Value", default)]
    pub value: Option<Value>,
}

impl ResultRow {
    /// The value as text. Strings pass through, numbers and booleans are
    /// stringified, anything else counts as no data.
    pub fn value_text(&self) -> Option<String> {
        match self.value.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// A successfully decoded vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedVehicle {
    /// The VIN that was looked up
    pub vin: String,

    /// Flattened attributes with non-empty values
    pub vehicle_info: BTreeMap<String, String>,

    /// The upstream payload, unmodified
    pub raw_data: Value,
}

/// Outcome of one decode attempt.
///
/// Serializes to the tool envelope:
/// `{"success": true, "vin", "vehicle_info", "raw_data"}` or
/// `{"success": false, "vin", "error"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeResult {
    Success(DecodedVehicle),
    Failure {
        /// Echo of the input; `None` when the argument was absent
        vin: Option<String>,
        error: DecodeError,
    },
}

impl DecodeResult {
    /// Create a failure result
    pub fn failure(vin: Option<String>, error: DecodeError) -> Self {
        DecodeResult::Failure { vin, error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DecodeResult::Success(_))
    }

    /// The echoed VIN, if any
    pub fn vin(&self) -> Option<&str> {
        match self {
            DecodeResult::Success(vehicle) => Some(&vehicle.vin),
            DecodeResult::Failure { vin, .. } => vin.as_deref(),
        }
    }

    pub fn vehicle(&self) -> Option<&DecodedVehicle> {
        match self {
            DecodeResult::Success(vehicle) => Some(vehicle),
            DecodeResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&DecodeError> {
        match self {
            DecodeResult::Success(_) => None,
            DecodeResult::Failure { error, .. } => Some(error),
        }
    }
}

impl Serialize for DecodeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DecodeResult::Success(vehicle) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("vin", &vehicle.vin)?;
                map.serialize_entry("vehicle_info", &vehicle.vehicle_info)?;
                map.serialize_entry("raw_data", &vehicle.raw_data)?;
                map.end()
            }
            DecodeResult::Failure { vin, error } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("vin", vin)?;
                map.serialize_entry("error", &error.to_string())?;
                map.end()
            }
        }
    }
}

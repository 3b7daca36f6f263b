//! vPIC API client
//!
//! Decodes a VIN against the NHTSA vPIC decode endpoint and flattens the
//! returned attribute rows into a name/value map.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::vpic::{DECODE_VIN_PATH, FORMAT, RESULTS_FIELD};
use crate::config::Config;
use crate::error::DecodeError;
use crate::vpic::transport::{HttpTransport, ReqwestTransport};
use crate::vpic::types::{DecodeResult, DecodedVehicle, ResultRow};

/// vPIC decode client
pub struct VinDecoder<T: HttpTransport = ReqwestTransport> {
    /// HTTP transport
    transport: T,

    /// Endpoint and sentinel configuration
    config: Config,
}

impl VinDecoder<ReqwestTransport> {
    /// Create a decoder backed by reqwest
    pub fn with_reqwest(config: Config) -> Self {
        Self::new(ReqwestTransport::new(), config)
    }
}

impl<T: HttpTransport> VinDecoder<T> {
    /// Create a decoder on top of an arbitrary transport
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Build the decode URL for a VIN
    pub fn decode_url(&self, vin: &str) -> String {
        format!(
            "{}/{}/{}?format={}",
            self.config.api_base_url,
            DECODE_VIN_PATH,
            urlencoding::encode(vin),
            FORMAT
        )
    }

    /// Decode a VIN into the tool envelope. Never fails; every error is
    /// folded into [`DecodeResult::Failure`].
    pub async fn decode(&self, vin: &str) -> DecodeResult {
        match self.try_decode(vin).await {
            Ok(vehicle) => DecodeResult::Success(vehicle),
            Err(error) => {
                tracing::warn!(vin = %vin, error = %error, "VIN decode failed");
                DecodeResult::failure(Some(vin.to_string()), error)
            }
        }
    }

    /// Decode a VIN, returning the classified error on failure.
    ///
    /// Surrounding whitespace is trimmed for the lookup only; the result
    /// echoes `vin` as given.
    pub async fn try_decode(&self, vin: &str) -> Result<DecodedVehicle, DecodeError> {
        let lookup_vin = vin.trim();
        if lookup_vin.is_empty() {
            return Err(DecodeError::vin_required());
        }

        let url = self.decode_url(lookup_vin);
        tracing::info!(vin = %lookup_vin, "Decoding VIN");
        tracing::debug!(url = %url, "Requesting vPIC decode");

        let response = self.transport.get(&url).await?;
        tracing::debug!(status = response.status, "vPIC responded");

        if !response.is_success() {
            return Err(DecodeError::UpstreamStatus {
                status: response.status,
            });
        }

        let raw_data: Value =
            serde_json::from_str(&response.body).map_err(|e| DecodeError::MalformedResponse {
                message: format!("response is not valid JSON ({})", e),
            })?;

        let rows = parse_results(&raw_data)?;
        if rows.is_empty() {
            return Err(DecodeError::NoResults);
        }

        let vehicle_info = flatten_results(&rows, &self.config);
        tracing::debug!(
            rows = rows.len(),
            attributes = vehicle_info.len(),
            "Flattened vPIC results"
        );

        Ok(DecodedVehicle {
            vin: vin.to_string(),
            vehicle_info,
            raw_data,
        })
    }
}

/// Extract the typed result rows from an upstream payload
pub fn parse_results(raw_data: &Value) -> Result<Vec<ResultRow>, DecodeError> {
    let results = raw_data
        .get(RESULTS_FIELD)
        .ok_or_else(|| DecodeError::MalformedResponse {
            message: format!("missing '{}' field", RESULTS_FIELD),
        })?;

    if !results.is_array() {
        return Err(DecodeError::MalformedResponse {
            message: format!("'{}' is not a list", RESULTS_FIELD),
        });
    }

    serde_json::from_value(results.clone()).map_err(|e| DecodeError::MalformedResponse {
        message: format!("unexpected result row format ({})", e),
    })
}

/// Collapse result rows into a name/value map.
///
/// Rows with a null, empty, or sentinel value are skipped. Numeric and
/// boolean values are kept in their JSON text form. Later rows win on
/// duplicate names.
pub fn flatten_results(rows: &[ResultRow], config: &Config) -> BTreeMap<String, String> {
    rows.iter()
        .filter_map(|row| {
            let value = row.value_text()?;
            if config.is_omitted(&value) {
                return None;
            }
            Some((row.variable.clone(), value))
        })
        .collect()
}

//! Shared helpers for the outbound HTTP clients

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::FetchError;

/// Helper to deserialize null as default (empty vec, etc.)
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse an endpoint URL built from configuration
pub(crate) fn parse_url(raw: &str) -> Result<reqwest::Url, FetchError> {
    reqwest::Url::parse(raw).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))
}

/// Check the status and decode a JSON body.
///
/// The body is read as text first so that a schema mismatch surfaces as
/// `Decode` rather than as a transport failure.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FetchError> {
    let status = response.status();

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(FetchError::BadStatus {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

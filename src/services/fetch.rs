use crate::domain::errors::ZeroBraveError;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Single GET with transport defaults. Only HTTP 200 is accepted.
pub fn download_policies(url: &str) -> Result<Map<String, Value>, ZeroBraveError> {
    info!(url, "downloading policy document");
    let client = reqwest::blocking::Client::new();
    let resp = client.get(url).send()?;
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(ZeroBraveError::DownloadFailed {
            status: status.as_u16(),
        });
    }
    let body = resp.bytes()?;
    debug!(bytes = body.len(), "policy document received");
    parse_document(&body)
}

pub fn parse_document(body: &[u8]) -> Result<Map<String, Value>, ZeroBraveError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| ZeroBraveError::InvalidDocument(format!("body is not UTF-8: {}", e)))?;
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ZeroBraveError::InvalidDocument(
            "expected a JSON object".to_string(),
        )),
        Err(e) => Err(ZeroBraveError::InvalidDocument(e.to_string())),
    }
}

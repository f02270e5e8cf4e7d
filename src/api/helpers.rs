//! Fallback response builders.

use serde_json::json;

use crate::api::response::{APPLICATION_JSON, CONTENT_TYPE};
use crate::core::config::AdapterConfig;
use crate::core::models::{ErrorBody, INTERNAL_SERVER_ERROR, ProxyResponse};
use crate::errors::AdapterError;

/// Builds the error body for `err`. `stack` is only filled in development mode.
#[must_use]
pub fn error_body(err: &AdapterError, config: &AdapterConfig) -> ErrorBody {
    ErrorBody {
        error: INTERNAL_SERVER_ERROR.to_string(),
        message: err.message(),
        stack: config.development_mode.then(|| err.stack()),
    }
}

/// Returns the 500 JSON fallback response for `err`.
#[must_use]
pub fn error_response(err: &AdapterError, config: &AdapterConfig) -> ProxyResponse {
    let mut response = ProxyResponse {
        status_code: 500,
        ..ProxyResponse::default()
    };
    response
        .headers
        .insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    response.body = json!(error_body(err, config)).to_string();
    response
}

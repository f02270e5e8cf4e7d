//! Response sink handed to the wrapped application.

use serde::Serialize;

use crate::core::models::ProxyResponse;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json; charset=utf-8";

/// Collects what the application writes. Status defaults to 200.
///
/// Once a body has been sent the writer is *committed*: later writes are
/// ignored, mirroring a response whose bytes already left the process.
#[derive(Debug, Default)]
pub struct ResponseWriter {
    response: ProxyResponse,
    committed: bool,
}

impl ResponseWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&mut self, status_code: u16) -> &mut Self {
        if !self.committed {
            self.response.status_code = status_code;
        }
        self
    }

    /// Sets a header, replacing any existing value with a case-insensitively
    /// equal name.
    pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
        if !self.committed {
            self.response
                .headers
                .retain(|k, _| !k.eq_ignore_ascii_case(name));
            self.response
                .headers
                .insert(name.to_string(), value.to_string());
        }
        self
    }

    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.response
            .headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v.as_str()))
    }

    /// Sends the body and commits the response.
    pub fn send(&mut self, body: impl Into<String>) {
        if self.committed {
            return;
        }
        self.response.body = body.into();
        self.committed = true;
    }

    /// Sends a base64-encoded binary body and commits the response.
    pub fn send_base64(&mut self, encoded: impl Into<String>) {
        if self.committed {
            return;
        }
        self.response.is_base64_encoded = true;
        self.send(encoded);
    }

    /// Serializes `value` as the body with a JSON content type.
    ///
    /// # Errors
    ///
    /// Fails if `value` cannot be serialized; the writer is left uncommitted.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), serde_json::Error> {
        let body = serde_json::to_string(value)?;
        self.header(CONTENT_TYPE, APPLICATION_JSON);
        self.send(body);
        Ok(())
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.response.status_code
    }

    #[must_use]
    pub fn into_response(self) -> ProxyResponse {
        self.response
    }
}

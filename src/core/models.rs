use std::collections::{BTreeMap, HashMap};

use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};

/// Text of the `error` field in every fallback response.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inbound HTTP request as delivered by API Gateway (REST v1 or HTTP v2)
/// or a Lambda Function URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw_path: String,
    /// REST (v1) events carry `path` instead of `rawPath`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw_query_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpContext {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
}

impl ProxyRequest {
    /// HTTP method, upper-cased. v1 events carry `httpMethod`, v2 events carry
    /// `requestContext.http.method`. Defaults to `GET`.
    #[must_use]
    pub fn method(&self) -> String {
        self.http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .map(|http| http.method.as_str())
            })
            .unwrap_or("GET")
            .to_ascii_uppercase()
    }

    /// Request path, preferring `rawPath` over the v1 `path`. Defaults to `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        if !self.raw_path.is_empty() {
            return &self.raw_path;
        }
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => "/",
        }
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        if let Some(v) = self.headers.get(name) {
            return Some(v);
        }
        self.headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v.as_str()))
    }

    /// Looks up a query parameter, preferring the pre-parsed v1 map and
    /// falling back to percent-decoding `rawQueryString`.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<String> {
        if let Some(v) = self
            .query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
        {
            return Some(v.clone());
        }

        self.raw_query_string.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode_component(key)? == name {
                decode_component(value)
            } else {
                None
            }
        })
    }

    /// Raw body bytes, base64-decoded when the event says so.
    pub fn body_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        match &self.body {
            None => Ok(Vec::new()),
            Some(body) if self.is_base64_encoded => {
                base64::engine::general_purpose::STANDARD.decode(body)
            }
            Some(body) => Ok(body.as_bytes().to_vec()),
        }
    }
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Outbound HTTP response in the Lambda proxy integration shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl Default for ProxyResponse {
    fn default() -> Self {
        Self {
            status_code: 200,
            headers: BTreeMap::new(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }
}

/// JSON body of the 500 fallback. `stack` is omitted entirely, not `null`,
/// outside development mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

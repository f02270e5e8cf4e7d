//! Serverless bridge - runs an HTTP application inside AWS Lambda.
//!
//! The application is loaded lazily on the first invocation of an execution
//! context and reused afterwards. Every failure, whether the application
//! could not be loaded or its handler failed, is turned into a 500 JSON
//! response instead of escaping the Lambda entry point.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use serverless_bridge::api::{Adapter, function_handler};
//! use serverless_bridge::api::response::ResponseWriter;
//! use serverless_bridge::app::{Handler, factory_fn};
//! use serverless_bridge::core::config::AdapterConfig;
//! use serverless_bridge::core::models::ProxyRequest;
//!
//! struct Ping;
//!
//! #[async_trait::async_trait]
//! impl Handler for Ping {
//!     async fn call(&self, _req: &ProxyRequest, res: &mut ResponseWriter) -> anyhow::Result<()> {
//!         res.json(&serde_json::json!({ "pong": true }))?;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     serverless_bridge::setup_logging();
//!
//!     let factory = factory_fn(|| async { Ok::<_, anyhow::Error>(Arc::new(Ping) as Arc<dyn Handler>) });
//!     let adapter = Adapter::new(factory, AdapterConfig::from_env());
//!     let adapter = &adapter;
//!
//!     lambda_runtime::run(lambda_runtime::service_fn(move |event| {
//!         function_handler(adapter, event)
//!     }))
//!     .await
//! }
//! ```

pub mod api;
pub mod app;
pub mod core;
pub mod errors;

pub use errors::AdapterError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to stdout for `CloudWatch` Logs. The level filter comes from
/// `RUST_LOG` and defaults to `info`. Calling it more than once is harmless;
/// only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// serverless_bridge::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

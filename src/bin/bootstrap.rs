// Lambda bootstrap entry point.
//
// Wires the bundled status application into the adapter. Deployments that
// front a different application swap the factory passed to `Adapter::new`.

use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::{Error, run, service_fn};
use serde_json::json;
use serverless_bridge::api::response::ResponseWriter;
use serverless_bridge::api::{Adapter, function_handler};
use serverless_bridge::app::{Handler, factory_fn};
use serverless_bridge::core::config::AdapterConfig;
use serverless_bridge::core::models::ProxyRequest;
use tracing::info;

struct StatusApp;

#[async_trait]
impl Handler for StatusApp {
    async fn call(&self, req: &ProxyRequest, res: &mut ResponseWriter) -> anyhow::Result<()> {
        match (req.method().as_str(), req.path()) {
            ("GET" | "HEAD", "/api/health") => res.status(200).json(&json!({ "ok": true }))?,
            _ => res.status(404).json(&json!({ "error": "Not Found" }))?,
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    serverless_bridge::setup_logging();

    let config = AdapterConfig::from_env();
    info!(development_mode = config.development_mode, "Starting adapter");

    let factory = factory_fn(|| async {
        Ok::<_, anyhow::Error>(Arc::new(StatusApp) as Arc<dyn Handler>)
    });
    let adapter = Adapter::new(factory, config);
    let adapter = &adapter;

    run(service_fn(move |event| function_handler(adapter, event))).await
}

//! The request adapter: loads the application, delegates, and converts any
//! failure into the 500 JSON fallback so an invocation always gets an answer.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info, warn};

use super::helpers;
use super::response::ResponseWriter;
use crate::app::{AppFactory, ApplicationLoader};
use crate::core::config::AdapterConfig;
use crate::core::models::{ProxyRequest, ProxyResponse};
use crate::errors::{self, AdapterError};

pub struct Adapter<F> {
    loader: ApplicationLoader<F>,
    config: AdapterConfig,
}

impl<F: AppFactory> Adapter<F> {
    pub fn new(factory: F, config: AdapterConfig) -> Self {
        Self {
            loader: ApplicationLoader::new(factory),
            config,
        }
    }

    pub fn loader(&self) -> &ApplicationLoader<F> {
        &self.loader
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Serves one request. Never fails: load errors, handler errors and
    /// handler panics all become a 500 JSON response.
    ///
    /// If the handler fails after it already sent a body, that response is
    /// returned as-is and the failure is only logged.
    pub async fn handle(&self, req: ProxyRequest) -> ProxyResponse {
        let app = match self.loader.get_application().await {
            Ok(app) => app,
            Err(e) => {
                error!(error = ?e.inner(), "Serverless function error");
                return helpers::error_response(&e, &self.config);
            }
        };

        let mut res = ResponseWriter::new();
        let outcome = AssertUnwindSafe(app.call(&req, &mut res))
            .catch_unwind()
            .await;

        let failure = match outcome {
            Ok(Ok(())) => return res.into_response(),
            Ok(Err(e)) => AdapterError::Delegation(e),
            Err(payload) => AdapterError::Delegation(errors::from_panic(payload.as_ref())),
        };

        if res.is_committed() {
            warn!(
                error = %failure,
                status = res.status_code(),
                "Handler failed after sending a response; keeping the sent response"
            );
            return res.into_response();
        }

        error!(error = ?failure.inner(), "Serverless function error");
        helpers::error_response(&failure, &self.config)
    }
}

/// Lambda handler for the adapter. Always returns `Ok`; failures are
/// already folded into the response.
#[tracing::instrument(level = "info", skip(adapter, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler<F: AppFactory>(
    adapter: &Adapter<F>,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, Error> {
    let request = event.payload;
    info!(method = %request.method(), path = %request.path(), "Request received");

    let response = adapter.handle(request).await;

    info!(status = response.status_code, "Request complete");
    Ok(response)
}

//! The seam between the adapter and the application it fronts.
//!
//! The application is an opaque [`Handler`]. It is produced on demand by an
//! [`AppFactory`], which the adapter receives at construction time instead of
//! resolving anything itself.

pub mod loader;

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::api::response::ResponseWriter;
use crate::core::models::ProxyRequest;

pub use loader::{ApplicationLoader, LoaderState};

/// A request-processing application.
///
/// The handler owns response production: it writes status, headers and body
/// into `res`. Returning `Err` (or panicking) hands control back to the
/// adapter, which answers with the 500 fallback unless a body was already sent.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(&self, req: &ProxyRequest, res: &mut ResponseWriter) -> anyhow::Result<()>;
}

/// Produces the application handler. Called on cold start and again after
/// any failed attempt.
#[async_trait]
pub trait AppFactory: Send + Sync {
    async fn load(&self) -> anyhow::Result<Arc<dyn Handler>>;
}

/// [`AppFactory`] backed by an async closure.
pub struct FactoryFn<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> AppFactory for FactoryFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Arc<dyn Handler>>> + Send,
{
    async fn load(&self) -> anyhow::Result<Arc<dyn Handler>> {
        (self.f)().await
    }
}

/// Wraps an async closure as an [`AppFactory`].
///
/// ```
/// use std::sync::Arc;
/// use serverless_bridge::app::{factory_fn, Handler};
/// use serverless_bridge::api::response::ResponseWriter;
/// use serverless_bridge::core::models::ProxyRequest;
///
/// struct Hello;
///
/// #[async_trait::async_trait]
/// impl Handler for Hello {
///     async fn call(&self, _req: &ProxyRequest, res: &mut ResponseWriter) -> anyhow::Result<()> {
///         res.send("hello");
///         Ok(())
///     }
/// }
///
/// let factory = factory_fn(|| async { Ok::<_, anyhow::Error>(Arc::new(Hello) as Arc<dyn Handler>) });
/// # let _ = factory;
/// ```
pub fn factory_fn<F, Fut>(f: F) -> FactoryFn<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Arc<dyn Handler>>> + Send,
{
    FactoryFn { f }
}

/// Factory that hands out an already-built handler.
pub struct StaticFactory {
    handler: Arc<dyn Handler>,
}

impl StaticFactory {
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl AppFactory for StaticFactory {
    async fn load(&self) -> anyhow::Result<Arc<dyn Handler>> {
        Ok(Arc::clone(&self.handler))
    }
}

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::OnceCell;
use tracing::{error, info};

use super::{AppFactory, Handler};
use crate::errors::{self, AdapterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Uninitialized,
    Ready,
}

/// Lazily loads the application once per execution context and hands out the
/// cached handler afterwards.
///
/// Concurrent cold-start callers are serialized on the cell: the first
/// successful load wins and everyone else reuses it. A failed attempt leaves
/// the cell empty, so the next caller performs a fresh load.
pub struct ApplicationLoader<F> {
    factory: F,
    app: OnceCell<Arc<dyn Handler>>,
}

impl<F: AppFactory> ApplicationLoader<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            app: OnceCell::new(),
        }
    }

    /// Returns the cached handler, loading it first if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Load`] if the factory fails or panics. Nothing
    /// is cached in that case.
    pub async fn get_application(&self) -> Result<Arc<dyn Handler>, AdapterError> {
        let app = self.app.get_or_try_init(|| self.load_once()).await?;
        Ok(Arc::clone(app))
    }

    #[must_use]
    pub fn state(&self) -> LoaderState {
        if self.app.initialized() {
            LoaderState::Ready
        } else {
            LoaderState::Uninitialized
        }
    }

    async fn load_once(&self) -> Result<Arc<dyn Handler>, AdapterError> {
        info!("Loading application");

        let result = match AssertUnwindSafe(self.factory.load()).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(errors::from_panic(payload.as_ref())),
        };

        match result {
            Ok(app) => {
                info!("Application loaded");
                Ok(app)
            }
            Err(e) => {
                error!(error = ?e, "Error loading application");
                Err(AdapterError::Load(e))
            }
        }
    }
}

use std::any::Any;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to load application: {0}")]
    Load(anyhow::Error),

    #[error("Handler failed: {0}")]
    Delegation(anyhow::Error),
}

impl AdapterError {
    /// The wrapped failure itself, without the adapter's prefix.
    #[must_use]
    pub fn inner(&self) -> &anyhow::Error {
        match self {
            AdapterError::Load(e) | AdapterError::Delegation(e) => e,
        }
    }

    /// Human-readable text of the underlying failure.
    ///
    /// This is what ends up in the `message` field of the fallback response,
    /// so it carries no adapter prefix.
    #[must_use]
    pub fn message(&self) -> String {
        self.inner().to_string()
    }

    /// Diagnostic rendering: the cause chain, plus a backtrace when one was
    /// captured (`RUST_BACKTRACE`/`RUST_LIB_BACKTRACE`). Never empty.
    #[must_use]
    pub fn stack(&self) -> String {
        let rendered = format!("{:?}", self.inner());
        if rendered.trim().is_empty() {
            self.to_string()
        } else {
            rendered
        }
    }

    #[must_use]
    pub fn is_load(&self) -> bool {
        matches!(self, AdapterError::Load(_))
    }
}

/// Turns a caught panic payload into an error carrying the panic message.
#[must_use]
pub fn from_panic(payload: &(dyn Any + Send)) -> anyhow::Error {
    let text = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    };
    anyhow::anyhow!(text)
}

use std::env;

/// Environment variable naming the deployment environment.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Value of [`APP_ENV_VAR`] that turns on development mode.
pub const DEVELOPMENT: &str = "development";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Include diagnostic `stack` text in fallback error responses.
    pub development_mode: bool,
}

impl AdapterConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            development_mode: lookup(APP_ENV_VAR).is_some_and(|v| v == DEVELOPMENT),
        }
    }

    #[must_use]
    pub fn development() -> Self {
        Self {
            development_mode: true,
        }
    }
}

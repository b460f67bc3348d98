//! # chat0 client configuration
//!
//! Resolves the base URL of the chat0 backend for the current deployment and derives the
//! absolute URL of every API endpoint from it.
//!
//! The base URL is `NEXT_PUBLIC_API_URL` when `NODE_ENV` is `production` and the override is
//! non-empty, `http://localhost:8080` otherwise.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use chat0_config::{ApiConfig, Endpoint};
//!
//! let env = HashMap::from([
//!     ("NODE_ENV".to_string(), "production".to_string()),
//!     ("NEXT_PUBLIC_API_URL".to_string(), "https://api.example.com".to_string()),
//! ]);
//!
//! let config = ApiConfig::from_env(&env);
//! assert_eq!(config.endpoint(Endpoint::Health), "https://api.example.com/api/health");
//! assert_eq!(config.url("/api/chat"), "https://api.example.com/api/chat");
//! ```

pub mod config;
pub mod endpoints;
pub mod env;
pub mod error;
pub mod models;
pub mod types;

pub use config::{resolve_base_url, ApiConfig, DEFAULT_BASE_URL, PRODUCTION};
pub use endpoints::{Endpoint, EndpointTable};
pub use env::{EnvSource, ProcessEnv};
pub use error::{Error, Result};
pub use models::{model_config, supported_model_names, ModelConfig, Provider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.endpoints(), &EndpointTable::new(DEFAULT_BASE_URL));
        assert_eq!(types::ChatMessage::user("test").role, types::Role::User);
    }
}

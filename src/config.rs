use serde::Serialize;
use tracing::{debug, info};

use crate::endpoints::{join, Endpoint, EndpointTable};
use crate::env::{EnvSource, ProcessEnv, NEXT_PUBLIC_API_URL, NODE_ENV};

/// Base URL used whenever no applicable override exists
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Value of `NODE_ENV` enabling the base URL override
pub const PRODUCTION: &str = "production";

/// Resolved configuration of the chat0 backend as seen from a client
///
/// Built once from an [`EnvSource`] and immutable afterwards. Endpoint URLs are computed at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    base_url: String,
    endpoints: EndpointTable,
    environment: Option<String>,
}

impl ApiConfig {
    /// Build a configuration around an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            endpoints: EndpointTable::new(&base_url),
            base_url,
            environment: None,
        }
    }

    /// Record the deployment indicator the configuration was resolved for
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Resolve the configuration from `NODE_ENV` and `NEXT_PUBLIC_API_URL`
    pub fn from_env(env: &impl EnvSource) -> Self {
        let config = Self::new(resolve_base_url(env));

        match env.get(NODE_ENV) {
            Some(environment) => config.with_environment(environment),
            None => config,
        }
    }

    /// Resolve the configuration from the environment of the current process
    pub fn from_process_env() -> Self {
        Self::from_env(&ProcessEnv)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `NODE_ENV` value at resolution time, if it was set
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn endpoints(&self) -> &EndpointTable {
        &self.endpoints
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> &str {
        self.endpoints.get(endpoint)
    }

    /// Absolute URL of `path`, expected to start with `/`
    ///
    /// The path is appended to the base URL as is, without validation.
    pub fn url(&self, path: &str) -> String {
        join(&self.base_url, path)
    }

    /// Log the base URL, endpoint table and environment for debugging
    pub fn log(&self) {
        info!(
            base_url = %self.base_url,
            endpoints = ?self.endpoints,
            environment = self.environment.as_deref().unwrap_or("<unset>"),
            "API configuration"
        );
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Resolve the backend base URL
///
/// `NEXT_PUBLIC_API_URL` is used only when `NODE_ENV` is `production` and the override is
/// non-empty. Every other case resolves to [`DEFAULT_BASE_URL`].
pub fn resolve_base_url(env: &impl EnvSource) -> String {
    let environment = env.get(NODE_ENV);
    let api_url = env.get(NEXT_PUBLIC_API_URL);

    if environment.as_deref() != Some(PRODUCTION) {
        if api_url.is_some() {
            debug!(?environment, "Ignoring {NEXT_PUBLIC_API_URL} outside of production");
        }
        return DEFAULT_BASE_URL.to_string();
    }

    match api_url {
        Some(api_url) if !api_url.is_empty() => api_url,
        _ => {
            debug!("{NEXT_PUBLIC_API_URL} is not set, using {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_log(config: &ApiConfig) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || config.log());

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_development_uses_default() {
        let config = ApiConfig::from_env(&env(&[(NODE_ENV, "development")]));

        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.endpoint(Endpoint::Chat), "http://localhost:8080/api/chat");
        assert_eq!(config.environment(), Some("development"));
    }

    #[test]
    fn test_override_ignored_outside_production() {
        for environment in ["development", "test", "Production", "staging", ""] {
            let vars = env(&[
                (NODE_ENV, environment),
                (NEXT_PUBLIC_API_URL, "https://api.example.com"),
            ]);
            assert_eq!(resolve_base_url(&vars), DEFAULT_BASE_URL, "{environment}");
        }

        let vars = env(&[(NEXT_PUBLIC_API_URL, "https://api.example.com")]);
        assert_eq!(resolve_base_url(&vars), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_production_override() {
        let config = ApiConfig::from_env(&env(&[
            (NODE_ENV, "production"),
            (NEXT_PUBLIC_API_URL, "https://api.example.com"),
        ]));

        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(
            config.endpoint(Endpoint::Health),
            "https://api.example.com/api/health"
        );
    }

    #[test]
    fn test_production_without_override() {
        let config = ApiConfig::from_env(&env(&[(NODE_ENV, "production")]));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        // an empty override falls back as well
        let config = ApiConfig::from_env(&env(&[
            (NODE_ENV, "production"),
            (NEXT_PUBLIC_API_URL, ""),
        ]));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_no_environment() {
        let config = ApiConfig::from_env(&env(&[]));
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.environment(), None);
    }

    #[test]
    fn test_url() {
        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(config.url("/api/chat"), "https://api.example.com/api/chat");
        assert_eq!(config.url("v1/models"), "https://api.example.comv1/models");
        assert_eq!(config.url(""), "https://api.example.com");
    }

    #[test]
    fn test_endpoints_match_url() {
        let config = ApiConfig::new("https://api.example.com");
        for (endpoint, url) in config.endpoints().iter() {
            assert_eq!(url, config.url(endpoint.path()));
        }
    }

    #[test]
    fn test_serialize() {
        let config = ApiConfig::new("https://api.example.com").with_environment("production");
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "baseUrl": "https://api.example.com",
                "endpoints": {
                    "CHAT": "https://api.example.com/api/chat",
                    "COMPLETION": "https://api.example.com/api/completion",
                    "HEALTH": "https://api.example.com/api/health",
                },
                "environment": "production",
            })
        );
    }

    #[test]
    fn test_log() {
        let config = ApiConfig::new("https://api.example.com").with_environment("production");
        let out = capture_log(&config);

        assert!(out.contains("INFO"), "{out}");
        assert!(out.contains("base_url=https://api.example.com"), "{out}");
        assert!(
            out.contains(r#""CHAT": "https://api.example.com/api/chat""#),
            "{out}"
        );
        assert!(
            out.contains(r#""COMPLETION": "https://api.example.com/api/completion""#),
            "{out}"
        );
        assert!(
            out.contains(r#""HEALTH": "https://api.example.com/api/health""#),
            "{out}"
        );
        assert!(out.contains(r#"environment="production""#), "{out}");
    }

    #[test]
    fn test_log_without_environment() {
        let out = capture_log(&ApiConfig::default());

        assert!(out.contains("base_url=http://localhost:8080"), "{out}");
        assert!(out.contains(r#"environment="<unset>""#), "{out}");
    }

    #[test]
    #[serial]
    fn test_from_process_env() {
        std::env::set_var(NODE_ENV, "production");
        std::env::set_var(NEXT_PUBLIC_API_URL, "https://chat0.example.org");

        let config = ApiConfig::from_process_env();
        assert_eq!(config.base_url(), "https://chat0.example.org");
        assert_eq!(config.environment(), Some("production"));

        std::env::remove_var(NODE_ENV);
        std::env::remove_var(NEXT_PUBLIC_API_URL);
    }
}

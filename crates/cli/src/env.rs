use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chat0_config::env::{NEXT_PUBLIC_API_URL, NODE_ENV};
use tracing::debug;

/// Variables the configuration is resolved from
///
/// Values given on the command line or set in the process environment take precedence over
/// the ones read from `--env-file`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvOptions {
    /// Deployment environment, only `production` honors --api-url
    #[arg(long, global = true, env = NODE_ENV)]
    environment: Option<String>,

    /// Backend base URL override
    #[arg(long, global = true, env = NEXT_PUBLIC_API_URL)]
    api_url: Option<String>,

    /// Read variables from a dotenv file
    #[arg(long, global = true, env = "CHAT0_ENV_FILE")]
    env_file: Option<PathBuf>,
}

impl EnvOptions {
    pub fn load(&self) -> Result<HashMap<String, String>> {
        let mut vars = HashMap::new();

        if let Some(path) = &self.env_file {
            let entries = dotenvy::from_path_iter(path)
                .with_context(|| format!("Could not read env file {}", path.display()))?;

            for entry in entries {
                let (key, value) = entry
                    .with_context(|| format!("Could not parse env file {}", path.display()))?;
                vars.insert(key, value);
            }
            debug!(path = %path.display(), count = vars.len(), "Loaded env file");
        }

        if let Some(environment) = &self.environment {
            vars.insert(NODE_ENV.to_string(), environment.clone());
        }
        if let Some(api_url) = &self.api_url {
            vars.insert(NEXT_PUBLIC_API_URL.to_string(), api_url.clone());
        }

        Ok(vars)
    }
}

use chat0_config::ApiConfig;

mod completion;
mod config;
mod endpoints;
mod models;
mod url;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Log the resolved configuration and print it as JSON
    Config(config::Options),
    /// Print the absolute URL of every endpoint
    Endpoints(endpoints::Options),
    /// Print the absolute URL of a path or of a named endpoint
    Url(url::Options),
    /// List the models accepted by the backend
    Models(models::Options),
    /// Print auto-completion script for your shell init file
    GenerateShellCompletion(completion::Options),
}

impl Command {
    pub fn run(self, api: &ApiConfig) -> anyhow::Result<()> {
        match self {
            Self::Config(opts) => config::run(opts, api),
            Self::Endpoints(opts) => endpoints::run(opts, api),
            Self::Url(opts) => url::run(opts, api),
            Self::Models(opts) => models::run(opts),
            Self::GenerateShellCompletion(opts) => completion::run(opts),
        }
    }
}

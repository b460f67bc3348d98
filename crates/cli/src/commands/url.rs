use chat0_config::{ApiConfig, Endpoint};

#[derive(Debug, Clone, clap::Args)]
pub struct Options {
    /// Path starting with `/`, or an endpoint name (CHAT, COMPLETION, HEALTH)
    target: String,
}

pub fn run(opts: Options, api: &ApiConfig) -> anyhow::Result<()> {
    println!("{}", resolve(api, &opts.target)?);
    Ok(())
}

fn resolve(api: &ApiConfig, target: &str) -> anyhow::Result<String> {
    if target.starts_with('/') {
        return Ok(api.url(target));
    }

    let endpoint: Endpoint = target.parse()?;
    Ok(api.endpoint(endpoint).to_string())
}

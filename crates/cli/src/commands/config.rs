use anyhow::Context;
use chat0_config::ApiConfig;

#[derive(Debug, Clone, clap::Args)]
pub struct Options {}

pub fn run(_opts: Options, api: &ApiConfig) -> anyhow::Result<()> {
    api.log();

    let json = serde_json::to_string_pretty(api).context("Could not serialize configuration")?;
    println!("{json}");

    Ok(())
}

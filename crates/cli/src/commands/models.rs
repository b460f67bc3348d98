use chat0_config::models::SUPPORTED_MODELS;
use chat0_config::Provider;

#[derive(Debug, Clone, clap::Args)]
pub struct Options {
    /// Only list models served by this provider
    #[arg(long)]
    provider: Option<Provider>,
}

pub fn run(opts: Options) -> anyhow::Result<()> {
    let models = SUPPORTED_MODELS
        .iter()
        .filter(|(_, config)| opts.provider.map_or(true, |p| config.provider == p));

    for (name, config) in models {
        println!(
            "{name:<20}{:<12}{:<40}{}",
            config.provider, config.model_id, config.header_key
        );
    }

    Ok(())
}

use chat0_config::ApiConfig;

#[derive(Debug, Clone, clap::Args)]
pub struct Options {
    /// Print relative paths next to the absolute URLs
    #[arg(long)]
    paths: bool,
}

pub fn run(opts: Options, api: &ApiConfig) -> anyhow::Result<()> {
    for (endpoint, url) in api.endpoints().iter() {
        if opts.paths {
            println!("{:<12}{:<18}{url}", endpoint.name(), endpoint.path());
        } else {
            println!("{:<12}{url}", endpoint.name());
        }
    }

    Ok(())
}

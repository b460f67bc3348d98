use chat0_config::ApiConfig;
use clap::Parser;

mod commands;
mod env;
mod logger;

#[derive(Debug, Parser)]
#[command(name = "chat0", about, author, version)]
struct Options {
    #[arg(long, global = true, env = "CHAT0_LOG_FORMAT", value_enum, default_value_t)]
    log_format: logger::LogFormat,

    #[command(flatten)]
    env: env::EnvOptions,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    logger::init(options.log_format);

    let vars = options.env.load()?;
    let api = ApiConfig::from_env(&vars);

    options.command.run(&api)
}

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap_complete::Shell;

#[derive(Debug, Clone, clap::Args)]
pub struct Options {
    #[arg(value_enum)]
    shell: Option<Shell>,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(opts: Options) -> anyhow::Result<()> {
    let Some(shell) = opts.shell.or_else(Shell::from_env) else {
        anyhow::bail!("No valid $SHELL found, you need to specify it in the command");
    };

    let mut out: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Could not create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    let mut cli = <crate::Options as clap::CommandFactory>::command();
    let name = cli.get_name().to_owned();
    clap_complete::generate(shell, &mut cli, name, &mut out);

    out.flush().context("Could not write completion script")
}

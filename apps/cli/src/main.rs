mod commands;
mod config;
mod main_lib;
mod render;

use std::io::Write;

use clap::Parser;
use commands::{run, Cli};
use config::Config;
use main_lib::{build_service, init_tracing};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_data_file(cli.data_file.clone());
    init_tracing(&config);

    let service = build_service(&config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &service, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

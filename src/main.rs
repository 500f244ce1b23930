mod cli;
mod commands;
mod terminal;

use clap::Parser;
use cli::CliArgs;

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let opts = CliArgs::parse();
    commands::run(opts)
}

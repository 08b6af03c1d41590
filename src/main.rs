use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

fn main() -> anyhow::Result<()> {
    let parsed = cli::Cli::parse();
    commands::handle_command(&parsed)
}

mod app;
mod cli;
mod helpers;
mod session;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    helpers::log::init(cli.verbose);
    app::run(cli)
}

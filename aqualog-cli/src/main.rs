//! aqualog CLI - log drinks and analyze hydration intake history.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqualog-cli",
    version,
    about = "Hydration intake tracking toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: aqualog_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    aqualog_cmd::run(cli.command)
}

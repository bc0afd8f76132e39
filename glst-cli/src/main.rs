//! GLST CLI - Command line tool for the global land-surface
//! temperature heatmap.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "glst-cli",
    version,
    about = "Global land-surface temperature heatmap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: glst_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    glst_cmd::run(cli.command).await
}

//! Command implementations for the GLST heatmap CLI.
//!
//! Provides subcommands for fetching the temperature dataset and
//! rendering it to an SVG heatmap, with support for offline rendering
//! from a previously fetched file.

use clap::Subcommand;

pub mod fetch;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Download the temperature dataset JSON to a local file
    Fetch {
        /// Dataset URL to fetch from
        #[arg(long, default_value = glst_data::client::DEFAULT_DATASET_URL)]
        url: String,

        /// Output path for the dataset JSON
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Render the heatmap SVG from the dataset
    Render {
        /// Dataset URL to fetch from (ignored when --input is given)
        #[arg(long, default_value = glst_data::client::DEFAULT_DATASET_URL)]
        url: String,

        /// Render from a local dataset JSON file instead of fetching
        #[arg(short = 'i', long)]
        input: Option<String>,

        /// Output path for the rendered SVG
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { url, output } => fetch::run_fetch(&url, &output).await,
        Command::Render { url, input, output } => {
            render::run_render(&url, input.as_deref(), &output).await
        }
    }
}

//! gptbot binary.

use anyhow::Result;
use clap::Parser;
use gptbot::{load_config, run_bot, run_complete, run_image, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Complete { prompt } => {
            let completion = run_complete(&prompt).await?;
            println!("{}", completion);
            Ok(())
        }
        Commands::Image {
            description,
            count,
            out,
        } => {
            for path in run_image(&description, count, &out).await? {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

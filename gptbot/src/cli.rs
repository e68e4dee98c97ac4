//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "gptbot")]
#[command(about = "Telegram assistant bot backed by OpenAI", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Send one prompt to the completion endpoint and print the raw completion.
    Complete { prompt: String },
    /// Generate images for a description and write them as image-<i>.png.
    Image {
        description: String,
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
        count: u8,
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["gptbot", "run", "--token", "abc"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                token: Some("abc".to_string())
            }
        );
    }

    #[test]
    fn test_parse_image_defaults() {
        let cli = Cli::try_parse_from(["gptbot", "image", "猫"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Image {
                description: "猫".to_string(),
                count: 1,
                out: PathBuf::from("."),
            }
        );
    }

    #[test]
    fn test_image_count_range() {
        assert!(Cli::try_parse_from(["gptbot", "image", "猫", "--count", "3"]).is_ok());
        assert!(Cli::try_parse_from(["gptbot", "image", "猫", "--count", "4"]).is_err());
        assert!(Cli::try_parse_from(["gptbot", "image", "猫", "-c", "0"]).is_err());
    }

    #[test]
    fn test_parse_complete() {
        let cli = Cli::try_parse_from(["gptbot", "complete", "你好"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Complete {
                prompt: "你好".to_string()
            }
        );
    }
}

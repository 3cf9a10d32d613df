#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    AskInput, AskStrategy, CommandStrategy, InitStrategy, RunInput, RunStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "blathers")]
#[command(about = "Telegram bot that looks up Animal Crossing villagers on the fandom wiki", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Telegram bot
    Run {
        /// Key file with the bot token and id (overrides config)
        #[arg(short, long)]
        keys: Option<PathBuf>,
    },
    /// Answer one chat command locally, e.g. `blathers ask '!ac_stats raymond species'`
    Ask {
        /// The chat message, as it would be typed in the chat
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run { keys } => RunStrategy.execute(RunInput { keys }).await,
        Commands::Ask { message } => {
            AskStrategy
                .execute(AskInput {
                    message: message.join(" "),
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

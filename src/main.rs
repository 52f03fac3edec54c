use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use garur_voice::catalog::BooksClient;
use garur_voice::console::ConsoleVoice;
use garur_voice::interpreter::{CommandTable, parser};
use garur_voice::speech::SpeechOutput;
use garur_voice::{Config, Daemon};

/// Garur - wake-phrase voice control gateway for the Garur reading assistant
#[derive(Parser)]
#[command(name = "garur", version, about)]
struct Cli {
    /// Config file path (defaults to ~/.config/garur/config.toml)
    #[arg(short, long, env = "GARUR_CONFIG")]
    config: Option<PathBuf>,

    /// Wake phrase override
    #[arg(short, long)]
    wake: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Speak a line through the console voice
    Say {
        /// Text to speak
        #[arg(default_value = "Hello! This is a test of the Garur speech output.")]
        text: String,
    },
    /// Print the command table
    Commands,
    /// Parse an utterance and print the structured request
    Parse {
        /// Utterance to classify
        utterance: String,
    },
    /// Search the books catalog
    Books {
        /// Search query
        query: String,
        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,garur_voice=info",
        1 => "info,garur_voice=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(wake) = cli.wake {
        config.wake_phrase = wake;
    }

    if let Some(cmd) = cli.command {
        return match cmd {
            Command::Say { text } => say(&config, &text).await,
            Command::Commands => {
                print_commands(&config);
                Ok(())
            }
            Command::Parse { utterance } => {
                println!("{:?}", parser::parse(&utterance));
                Ok(())
            }
            Command::Books { query, limit } => books(&config, &query, limit).await,
        };
    }

    tracing::info!(wake_phrase = %config.wake_phrase, "starting garur gateway");
    println!(
        "Type a transcript line and press enter; say \"{}\" to begin.",
        config.wake_phrase
    );
    Daemon::new(config).run().await?;
    Ok(())
}

/// Speak one line and wait for playback to finish
async fn say(config: &Config, text: &str) -> anyhow::Result<()> {
    let voice = Arc::new(ConsoleVoice::new(config.narration_pace));
    let speech = SpeechOutput::new(voice, config.speech.clone());

    if !speech.speak(text).finished().await {
        anyhow::bail!("utterance was cancelled before finishing");
    }
    Ok(())
}

/// Print the command table in registration order
fn print_commands(config: &Config) {
    let table = CommandTable::with_extra_routes(&config.extra_commands);
    println!("Registered commands (first match wins):");
    for command in table.iter() {
        println!("  {:<16} {:?}", command.phrase(), command.action());
    }
}

/// Search the books catalog and print matching volumes
async fn books(config: &Config, query: &str, limit: usize) -> anyhow::Result<()> {
    let client = BooksClient::new(config.books_url.clone(), config.books_api_key.clone());
    let volumes = client.search(query).await;

    if volumes.is_empty() {
        println!("No results for \"{query}\"");
        return Ok(());
    }

    for volume in volumes.iter().take(limit) {
        let info = &volume.volume_info;
        if info.authors.is_empty() {
            println!("{} [{}]", info.title, volume.id);
        } else {
            println!("{} by {} [{}]", info.title, info.authors.join(", "), volume.id);
        }
    }
    Ok(())
}

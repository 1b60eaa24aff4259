mod clipboard;
mod convert;
mod key;
mod messages;

use afflink_client::{ClientOptions, FileStore, Session};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "afflink")]
#[command(about = "Convert merchant URLs into affiliate tracking links")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage the stored affiliate API key
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// Convert a merchant URL into a tracking link
    Convert {
        /// Merchant page URL, e.g. https://www.nike.com/tw/...
        url: String,
        /// Copy the tracking link to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// List brands whose URLs can be converted
    Brands,
    /// Convert URLs read from stdin, one per line
    Shell {
        /// Copy each tracking link to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

/// Sub-commands available under `key`.
#[derive(Debug, Subcommand)]
enum KeyCommands {
    /// Store an API key and load its brands
    Set {
        #[arg(env = "AFFLINK_API_KEY", hide_env_values = true)]
        key: String,
    },
    /// Show the stored key (redacted) and its brand status
    Show,
    /// Delete the stored key
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = afflink_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::new(
        ClientOptions::from(&config),
        FileStore::new(&config.state_dir),
    );

    match cli.command {
        Commands::Key { command } => match command {
            KeyCommands::Set { key } => key::run_key_set(&session, &key).await,
            KeyCommands::Show => key::run_key_show(&session).await,
            KeyCommands::Clear => key::run_key_clear(&session),
        },
        Commands::Convert { url, copy } => convert::run_convert(&session, &url, copy).await,
        Commands::Brands => convert::run_brands(&session).await,
        Commands::Shell { copy } => convert::run_shell(&session, copy).await,
    }
}

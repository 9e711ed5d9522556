use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use uniquest_chat::{
    config::Config,
    repl,
    services::{
        backend::HttpBackend,
        networked::NetworkedClient,
        offline::{OfflineClient, ReplyTable},
    },
};

#[derive(Parser, Debug)]
#[command(name = "uniquest", version, about = "UniQuest college chat in the terminal")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Chat with the backend's /chat endpoint
    Networked {
        /// Overrides UNIQUEST_API_URL
        #[arg(long)]
        api_url: Option<String>,
        /// Overrides UNIQUEST_TIMEOUT_SECS
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Keyword lookup, no network
    Offline {
        #[arg(long, value_enum, default_value_t = Table::Basic)]
        table: Table,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Table {
    Basic,
    Colleges,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    match cli.mode {
        Mode::Networked {
            api_url,
            timeout_secs,
        } => {
            let mut config = Config::from_env()?;
            if let Some(url) = api_url {
                config = config.with_api_url(url);
            }
            if let Some(secs) = timeout_secs {
                config = config.with_timeout(Duration::from_secs(secs));
            }

            let backend = HttpBackend::new(&config)?;
            info!(endpoint = %backend.endpoint(), "🎓 UniQuest chat ready");
            let mut client = NetworkedClient::new(backend);
            repl::run(&mut client, stdin, stdout).await?;
        }
        Mode::Offline { table } => {
            let table = match table {
                Table::Basic => ReplyTable::basic(),
                Table::Colleges => ReplyTable::college_samples(),
            };
            info!(entries = table.len(), "offline chat ready");
            let mut client = OfflineClient::new(table);
            repl::run(&mut client, stdin, stdout).await?;
        }
    }

    Ok(())
}

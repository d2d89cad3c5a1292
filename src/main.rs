use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use goversion_notifier::config::Config;
use goversion_notifier::logging::{self, LogFormat};
use goversion_notifier::release::workflow::WorkflowOutcome;
use goversion_notifier::server::{build_watcher, run_server};

#[derive(Parser)]
#[command(name = "goversion-notifier")]
#[command(version, about = "Announces new Go releases to a chat webhook")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve HTTP; each request to / runs one release check (default)
    Serve,
    /// Run one release check and exit
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let _guard = logging::init(LogFormat::from_env())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => runtime.block_on(run_server(&config)),
        Command::Check => runtime.block_on(async {
            let watcher = build_watcher(&config)?;
            match watcher.run().await? {
                WorkflowOutcome::Unchanged { version } => info!("{} already announced", version),
                WorkflowOutcome::Notified { version } => info!("announced {}", version),
            }
            Ok::<_, anyhow::Error>(())
        }),
    }
}

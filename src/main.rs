//! Management CLI for the settings store.
//!
//! Wires a file-backed option store, the in-memory scheduler and a
//! tracing audit sink into the mutation engine. Actions issued here
//! are authenticated out of band (shell access), so the nonce check is
//! pre-verified.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentinel_settings::audit::TracingAudit;
use sentinel_settings::engine::{PreverifiedAction, SettingsAction, SettingsEngine, Toggle};
use sentinel_settings::schedule::InMemoryScheduler;
use sentinel_settings::store::FileStore;
use sentinel_settings::Outcome;

#[derive(Parser)]
#[command(name = "sentinel-settings")]
#[command(about = "Manage the security monitor's settings store", long_about = None)]
struct Cli {
    /// Path of the JSON settings document.
    #[arg(short, long, default_value = "sentinel-settings.json")]
    store: String,

    /// Web-served document root, used to vet exporter paths.
    #[arg(long, default_value = "/var/www/html")]
    document_root: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the allow-listed settings as a JSON document
    Export,
    /// Import a settings document produced by `export`
    Import {
        /// File holding the JSON document.
        file: String,
        /// Acknowledge that existing settings will be overwritten.
        #[arg(long)]
        confirm: bool,
    },
    /// Enable or disable reverse proxy support
    Revproxy { state: String },
    /// Pick the trusted client IP header
    Header { name: String },
    /// Enable or disable DNS lookups for proxy detection
    DnsLookups { state: String },
    /// Enable or disable the comment monitor
    CommentMonitor { state: String },
    /// Set the audit log report limit
    AuditLimit { limit: String },
    /// Set the self-hosted exporter path; an empty path disables it
    ExporterPath {
        #[arg(default_value = "")]
        path: String,
    },
    /// Delete every allow-listed option
    Reset {
        /// Acknowledge that all settings will be deleted.
        #[arg(long)]
        confirm: bool,
    },
}

fn toggle(state: &str) -> Result<Toggle, Box<dyn std::error::Error>> {
    Toggle::parse(state)
        .ok_or_else(|| format!("expected 'enable' or 'disable', got {:?}", state).into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentinel_settings=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let store = FileStore::open(&cli.store)?;
    let mut engine = SettingsEngine::new(
        store,
        InMemoryScheduler::new(),
        TracingAudit,
        PreverifiedAction,
        &cli.document_root,
    );

    let action = match cli.command {
        Commands::Export => {
            println!("{}", serde_json::to_string_pretty(&engine.export())?);
            return Ok(());
        }
        Commands::Import { file, confirm } => SettingsAction::Import {
            document: std::fs::read_to_string(file)?,
            confirmed: confirm,
        },
        Commands::Revproxy { state } => SettingsAction::ReverseProxy(toggle(&state)?),
        Commands::Header { name } => SettingsAction::AddressHeader(name),
        Commands::DnsLookups { state } => SettingsAction::DnsLookups(toggle(&state)?),
        Commands::CommentMonitor { state } => SettingsAction::CommentMonitor(toggle(&state)?),
        Commands::AuditLimit { limit } => SettingsAction::AuditLogLimit(limit),
        Commands::ExporterPath { path } => SettingsAction::SelfHostingPath(path),
        Commands::Reset { confirm } => SettingsAction::ResetOptions { confirmed: confirm },
    };

    match engine.apply(action) {
        Ok(Outcome::Applied(message)) => println!("{}", message),
        Ok(Outcome::Imported(report)) => println!("{}", report.summary()),
        Ok(Outcome::Scheduled(report)) => println!("{}", report.summary()),
        Ok(Outcome::Ignored) => println!("action ignored: not authenticated"),
        Err(rejection) => {
            eprintln!("rejected: {}", rejection);
            std::process::exit(1);
        }
    }

    engine.store().persist()?;
    Ok(())
}

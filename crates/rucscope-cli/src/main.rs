use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rucscope_core::audit_log::{EndpointFilter, SuccessFilter};
use rucscope_core::lookup::IdentifierKind;

mod commands;
mod context;
mod navigator;

use context::AppContext;

#[derive(Parser)]
#[command(name = "rucscope")]
#[command(about = "rucscope - RUC/DNI lookups and the audited API-call log", long_about = None)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL, overriding config and RUCSCOPE_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        /// For scripts only: visible in the process list and shell history.
        /// Prompted on stdin when omitted.
        #[arg(long, hide = true)]
        password: Option<String>,
    },
    /// Log out and clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List audit log entries
    Logs(LogsArgs),
    /// Look up a taxpayer record
    Lookup {
        /// ruc or dni
        kind: IdentifierKind,
        identifier: String,
    },
    /// Open a view by path (/, /login, /dashboard)
    Open { path: String },
}

#[derive(Args)]
struct LogsArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// any, ruc or dni
    #[arg(long, default_value_t = EndpointFilter::Any)]
    endpoint: EndpointFilter,
    /// any, true or false
    #[arg(long, default_value_t = SuccessFilter::Any)]
    success: SuccessFilter,
    #[arg(long)]
    ip: Option<String>,
    /// Print the raw view state as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // Fails only if a subscriber is already installed, which is fine.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = AppContext::bootstrap(cli.config.as_deref(), cli.api_url.as_deref())?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&ctx, &email, password).await?
        }
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Whoami => commands::auth::whoami(&ctx)?,
        Commands::Logs(args) => {
            let filter = rucscope_core::audit_log::LogFilter {
                endpoint: args.endpoint,
                success: args.success,
                ip: args.ip.unwrap_or_default(),
            };
            commands::logs::list(&ctx, filter, args.page, args.json).await?
        }
        Commands::Lookup { kind, identifier } => {
            commands::lookup::run(&ctx, kind, &identifier).await?
        }
        Commands::Open { path } => commands::open::run(&ctx, &path).await?,
    }

    Ok(())
}

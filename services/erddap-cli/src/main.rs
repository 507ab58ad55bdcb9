//! ERDDAP command-line client.
//!
//! Search datasets on an ERDDAP server, describe their metadata, manage a
//! list of known servers, and interactively build tabledap/griddap data
//! queries.

mod client;
mod commands;
mod config;
mod prompt;
mod render;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use erddap_protocol::SearchQuery;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use client::ErddapClient;
use config::{resolve_server, CliConfig};
use prompt::StdinPrompter;
use render::{OutputFormat, Section};

#[derive(Parser, Debug)]
#[command(name = "erddap-cli")]
#[command(about = "ERDDAP CLI - Query and download ERDDAP datasets from terminal")]
struct Args {
    /// Log level (logs are written to stderr)
    #[arg(long, env = "ERDDAP_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "ERDDAP_TIMEOUT_SECS", default_value = "60", global = true)]
    timeout_secs: u64,

    /// Custom servers file (default: ~/.erddap_cli_servers.json)
    #[arg(long, env = "ERDDAP_SERVERS_FILE", global = true)]
    servers_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search datasets on an ERDDAP server
    Search(SearchArgs),

    /// Manage ERDDAP server URLs (list/add/remove/status)
    Servers {
        #[command(subcommand)]
        action: Option<ServersAction>,
    },

    /// Show dataset metadata, dimensions, and variables
    Describe(DescribeArgs),

    /// Interactively build a query to fetch ERDDAP data
    Fetch {
        /// Path to save the fetched data as CSV
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug)]
struct SearchArgs {
    /// Base ERDDAP server URL or known server name
    #[arg(long, env = "ERDDAP_SERVER")]
    server: String,

    /// Search term
    #[arg(long)]
    query: String,

    #[arg(long, default_value = "1")]
    page: u32,

    #[arg(long, default_value = "25")]
    items_per_page: u32,

    #[arg(long, allow_hyphen_values = true)]
    min_lon: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    max_lon: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    min_lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    max_lat: Option<f64>,

    /// Minimum time (ISO 8601)
    #[arg(long)]
    min_time: Option<String>,

    /// Maximum time (ISO 8601)
    #[arg(long)]
    max_time: Option<String>,

    /// Skip fetching the total matching-dataset count
    #[arg(long)]
    no_show_total: bool,
}

impl SearchArgs {
    fn to_query(&self) -> SearchQuery {
        SearchQuery::new(self.query.as_str())
            .with_page(self.page, self.items_per_page)
            .with_lon_bounds(self.min_lon, self.max_lon)
            .with_lat_bounds(self.min_lat, self.max_lat)
            .with_time_bounds(self.min_time.clone(), self.max_time.clone())
    }
}

#[derive(Subcommand, Debug)]
enum ServersAction {
    /// Add or update a custom ERDDAP server
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
    },

    /// Remove a custom ERDDAP server by name
    Remove {
        #[arg(long)]
        name: String,
    },

    /// Check status and capabilities of all known servers
    Status,
}

#[derive(ClapArgs, Debug)]
struct DescribeArgs {
    /// Base ERDDAP server URL or known server name
    #[arg(long, env = "ERDDAP_SERVER")]
    server: String,

    #[arg(long)]
    dataset_id: String,

    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output_format: OutputFormat,
}

/// Parse a `--log-level` value, falling back to `warn` when unrecognised.
fn log_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::WARN)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // RUST_LOG takes precedence over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(&args.log_level).to_string()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = CliConfig::new(args.timeout_secs, args.servers_file);
    debug!(?config, "Loaded configuration");

    let mut out = io::stdout().lock();

    match args.command {
        Command::Search(search) => {
            let client = ErddapClient::new(config.request_timeout)?;
            let server = resolve_server(&config, &search.server)?;
            commands::search::run(
                &client,
                &mut out,
                &server,
                &search.to_query(),
                !search.no_show_total,
            )
            .await?;
        }
        Command::Servers { action } => {
            let mut registry = config.registry()?;
            match action {
                None => commands::servers::list(&registry, &mut out)?,
                Some(ServersAction::Add { name, url }) => {
                    commands::servers::add(&mut registry, &mut out, &name, &url)?
                }
                Some(ServersAction::Remove { name }) => {
                    commands::servers::remove(&mut registry, &mut out, &name)?
                }
                Some(ServersAction::Status) => {
                    let client = ErddapClient::new(config.request_timeout)?;
                    commands::servers::status(&registry, &client, &mut out, config.status_timeout)
                        .await?
                }
            }
        }
        Command::Describe(describe) => {
            let client = ErddapClient::new(config.request_timeout)?;
            let server = resolve_server(&config, &describe.server)?;
            commands::describe::run(
                &client,
                &mut out,
                &server,
                &describe.dataset_id,
                describe.section,
                describe.output_format,
            )
            .await?;
        }
        Command::Fetch { output } => {
            let client = ErddapClient::new(config.request_timeout)?;
            commands::fetch::run(&client, &mut StdinPrompter, &mut out, output.as_deref()).await?;
        }
    }

    Ok(())
}

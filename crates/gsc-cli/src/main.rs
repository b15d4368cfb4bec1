//! gsc: Command line interface for the Search Console toolkit.
//!
//! This binary wires the auth, client, and fetch crates together behind
//! three subcommands: `stats`, `sites`, and `authorize`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gsc_auth::{AccessScope, StdinPrompt};
use gsc_client::SearchConsoleClient;
use gsc_fetch::output::{append_stats, stats_filename, write_sitelist};
use gsc_fetch::{fetch_stats, sites, StatsQuery};
use gsc_types::{Scheme, SplitBy};

#[derive(Parser, Debug)]
#[command(name = "gsc")]
#[command(version, about = "Pull search statistics and site lists from Google Search Console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level instead of info
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch search statistics and append them to a CSV file
    Stats(StatsArgs),
    /// Inspect or edit the account's site registry
    Sites {
        /// Path to the stored credential bundle
        credentials: PathBuf,

        #[command(subcommand)]
        command: SitesCommand,
    },
    /// Run the interactive OAuth consent flow and store a credential bundle
    Authorize {
        /// Path to the OAuth client secrets JSON
        secrets: PathBuf,

        /// Path the credential bundle is written to
        credentials: PathBuf,

        /// Access level to request (readonly or full)
        #[arg(long, default_value = "readonly", value_parser = parse_scope)]
        scope: AccessScope,
    },
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Path to the stored credential bundle
    credentials: PathBuf,

    /// Site identifiers without scheme or trailing slash, comma separated
    website: String,

    /// Breakdown to fetch (none, country, device or country-device)
    #[arg(default_value = "none", value_parser = parse_split)]
    split: SplitBy,

    /// Directory the output CSV lands in
    #[arg(default_value = ".")]
    outdir: PathBuf,

    /// Last report date (inclusive), YYYY-MM-DD; defaults to today
    date: Option<NaiveDate>,

    /// Number of days before DATE to include in the range
    #[arg(default_value_t = 0)]
    days: u64,

    /// Restrict the report to rich result appearances
    #[arg(short, long)]
    rich: bool,

    /// Canonicalize sites as http:// properties instead of https://
    #[arg(long)]
    http: bool,
}

#[derive(Subcommand, Debug)]
enum SitesCommand {
    /// Print the registered properties, sorted by URL
    List {
        /// Write the listing to a CSV file instead of stdout
        #[arg(long)]
        outfile: Option<PathBuf>,
    },
    /// Register properties, one API call per URL
    Add {
        /// Full property URLs
        #[arg(required = true)]
        sites: Vec<String>,
    },
    /// Unregister properties, one API call per URL
    Remove {
        /// Full property URLs
        #[arg(required = true)]
        sites: Vec<String>,
    },
}

/// Parse a split name from the CLI string.
fn parse_split(s: &str) -> Result<SplitBy, String> {
    s.parse().map_err(|e: gsc_types::TypeError| e.to_string())
}

/// Parse an access scope from the CLI string.
fn parse_scope(s: &str) -> Result<AccessScope, String> {
    s.parse().map_err(|e: gsc_auth::AuthError| e.to_string())
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command).await {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}

/// Initialize tracing to stderr, keeping stdout for data output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gsc=debug,gsc_auth=debug,gsc_client=debug,gsc_fetch=debug"
    } else {
        "gsc=info,gsc_auth=info,gsc_client=info,gsc_fetch=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Stats(args) => run_stats(args).await,
        Commands::Sites {
            credentials,
            command,
        } => run_sites(credentials, command).await,
        Commands::Authorize {
            secrets,
            credentials,
            scope,
        } => run_authorize(secrets, credentials, scope).await,
    }
}

async fn run_stats(args: StatsArgs) -> anyhow::Result<()> {
    let end_date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let start_date = end_date
        .checked_sub_days(Days::new(args.days))
        .context("date range reaches before the supported calendar")?;

    let sites: Vec<String> = args
        .website
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    let scheme = if args.http { Scheme::Http } else { Scheme::Https };

    let console = console_for(&args.credentials).await?;
    let query = StatsQuery::new(sites.into(), start_date, end_date)
        .with_split(args.split)
        .with_scheme(scheme)
        .with_rich_results(args.rich);

    let table = fetch_stats(&console, &query).await?;

    let path = args.outdir.join(stats_filename(args.split, args.rich));
    append_stats(&table, &path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Appended {} rows to {}", table.len(), path.display());
    Ok(())
}

async fn run_sites(credentials: PathBuf, command: SitesCommand) -> anyhow::Result<()> {
    let console = console_for(&credentials).await?;

    match command {
        SitesCommand::List { outfile } => {
            let urls = sites::list(&console).await?;
            match outfile {
                Some(path) => {
                    write_sitelist(&urls, &path)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!("Wrote {} sites to {}", urls.len(), path.display());
                }
                None => {
                    for url in &urls {
                        println!("{url}");
                    }
                }
            }
        }
        SitesCommand::Add { sites: site_urls } => {
            for ack in sites::add(&console, &site_urls.into()).await? {
                println!("{ack}");
            }
        }
        SitesCommand::Remove { sites: site_urls } => {
            for ack in sites::remove(&console, &site_urls.into()).await? {
                println!("{ack}");
            }
        }
    }
    Ok(())
}

async fn run_authorize(
    secrets: PathBuf,
    credentials: PathBuf,
    scope: AccessScope,
) -> anyhow::Result<()> {
    let transport = gsc_auth::authorize(&secrets, scope, &StdinPrompt)
        .await
        .with_context(|| format!("authorization with {} failed", secrets.display()))?;
    gsc_auth::save(&transport, &credentials)
        .with_context(|| format!("failed to write {}", credentials.display()))?;
    println!("Credentials stored in {}", credentials.display());
    Ok(())
}

/// Load the credential bundle and build an API client from it.
async fn console_for(credentials: &Path) -> anyhow::Result<SearchConsoleClient> {
    let transport = gsc_auth::load(credentials)
        .await
        .with_context(|| format!("failed to load credentials from {}", credentials.display()))?;
    Ok(SearchConsoleClient::new(transport))
}

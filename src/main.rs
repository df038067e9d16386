//! `czds` command line client.
//!
//! ```text
//! czds -u user@example.com -p secret --show-approved
//! czds -u user@example.com -p secret --zone com --path ./zones
//! czds -u user@example.com -p secret --all
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{eyre, Result};
use czds::catalog::DEFAULT_DOWNLOAD_DIR;
use czds::engine::{DEFAULT_API_ENDPOINT, DEFAULT_AUTH_ENDPOINT};
use czds::CzdsClient;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "czds",
    about = "Download zone files from ICANN's Centralized Zone Data Service",
    disable_version_flag = true
)]
struct Cli {
    /// ICANN CZDS username
    #[arg(short, long, env = "CZDS_USERNAME")]
    username: Option<String>,

    /// ICANN CZDS password
    #[arg(short, long, env = "CZDS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Show version
    #[arg(short = 'v', long)]
    version: bool,

    /// Download all approved zones
    #[arg(short, long)]
    all: bool,

    /// Download the zone file of one TLD
    #[arg(short, long, value_name = "TLD")]
    zone: Option<String>,

    /// Directory zone files are downloaded to
    #[arg(short = 'f', long = "path", value_name = "DIR", default_value = DEFAULT_DOWNLOAD_DIR)]
    path: PathBuf,

    /// List all TLDs you are approved to access
    #[arg(short, long = "show-approved")]
    show_approved: bool,

    /// Number of zone files downloaded at once with --all
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    jobs: usize,

    /// Base URL of the authentication API
    #[arg(long, value_name = "URL", default_value = DEFAULT_AUTH_ENDPOINT)]
    auth_endpoint: String,

    /// Base URL of the CZDS API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_ENDPOINT)]
    api_endpoint: String,
}

fn init_logging(debug: bool) {
    let filter = match debug {
        true => EnvFilter::new("debug"),
        false => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse();
    init_logging(cli.debug);
    if cli.debug {
        info!("Debug mode active");
    }

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if !(cli.show_approved || cli.all || cli.zone.is_some()) {
        return Ok(());
    }

    let (Some(username), Some(password)) = (cli.username, cli.password) else {
        return Err(eyre!("--username and --password are required"));
    };

    let mut client = CzdsClient::builder(username, password)
        .auth_endpoint(cli.auth_endpoint)
        .api_endpoint(cli.api_endpoint)
        .concurrent_downloads(cli.jobs)
        .build()?;

    client.downloader_mut().set_download_dir(cli.path.clone());
    debug!(path = %cli.path.display(), "Download path");

    if cli.show_approved {
        let approved = client.downloader().list_approved_identifiers().await?;
        println!("Approved TLDs:");
        for tld in approved {
            println!("   - {tld}");
        }
    }

    if cli.all {
        let files = client.downloader().download_all().await?;
        info!("Downloaded {} zone files", files.len());
        return Ok(());
    }

    if let Some(zone) = cli.zone {
        let file = client.downloader().download_one(&zone).await?;
        info!("Saved {}", file.display());
    }

    Ok(())
}

//! # catalog-viewer
//!
//! Command-line front end for the catalog view.
//!
//! - `list`: mount (fetch once) and print the view.
//! - `create`: mount, create a placeholder product, print the refreshed view.
//! - `interactive`: mount, then read `r` (refresh), `c` (create) or `q` (quit)
//!   from stdin. The view is re-printed whenever the store changes.

use catalog_viewer::config::{ConfigError, ViewerConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use catalog_viewer::controller::ControllerError;
use catalog_viewer::lifecycle::{setup_tracing, CatalogSystem, LifecycleError};
use catalog_viewer::model::SyncState;
use catalog_viewer::service::HttpCatalogService;
use catalog_viewer::session::{render_loop, run_session};
use catalog_viewer::view::CatalogView;
use clap::{Parser, Subcommand};
use std::io;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "catalog-viewer", about = "Demo catalog client")]
struct Cli {
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the catalog once and print it
    List,
    /// Create a placeholder product, then print the refreshed catalog
    Create,
    /// Refresh or create from stdin until `q`
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    setup_tracing();
    let cli = Cli::parse();

    let config = ViewerConfig::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    info!(base_url = %config.base_url, "Starting catalog viewer");

    let mut system = CatalogSystem::from_config(&config)?;

    match cli.command {
        Command::List => {
            system.mounted().await?.transpose()?;
            print_view(&system.controller.snapshot().await?);
        }
        Command::Create => {
            system.mounted().await?.transpose()?;
            system.controller.create_placeholder().await?;
            print_view(&system.controller.snapshot().await?);
        }
        Command::Interactive => return interactive(system).await,
    }

    system.shutdown().await?;
    Ok(())
}

async fn interactive(system: CatalogSystem<HttpCatalogService>) -> Result<(), CliError> {
    // Renders until the store's publisher goes away at shutdown.
    let renderer = tokio::spawn(render_loop(system.controller.subscribe(), io::stdout()));

    let input = BufReader::new(tokio::io::stdin());
    run_session(&system.controller, input, io::stderr()).await?;

    system.shutdown().await?;
    match renderer.await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(e.into()),
        Err(e) => {
            error!("Renderer task failed: {:?}", e);
            Ok(())
        }
    }
}

fn print_view(state: &SyncState) {
    println!("{}", CatalogView::from_state(state));
}

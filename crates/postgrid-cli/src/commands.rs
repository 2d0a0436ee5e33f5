use super::args::{Cli, Commands};
use super::handlers::{self, Page};
use crate::types::LogLevel;
use anyhow::Result;
use postgrid_runtime::{ConsentStore, Site, resolve_config_path, resolve_data_dir};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref());
    let format = cli.format;

    match cli.command {
        Commands::Grid => {
            let site = open_site(&config_path, cli.resource.as_deref())?;
            handlers::render::handle(&site, Page::Grid, format)
        }
        Commands::Category { name } => {
            let site = open_site(&config_path, cli.resource.as_deref())?;
            handlers::render::handle(&site, Page::Category(&name), format)
        }
        Commands::Search { query } => {
            let site = open_site(&config_path, cli.resource.as_deref())?;
            handlers::render::handle(&site, Page::Search(&query), format)
        }
        Commands::Article { location } => {
            let site = open_site(&config_path, cli.resource.as_deref())?;
            handlers::render::handle(&site, Page::Article(&location), format)
        }
        Commands::Posts => {
            let site = open_site(&config_path, cli.resource.as_deref())?;
            handlers::posts::handle(&site, format)
        }
        Commands::Categories => {
            let site = open_site(&config_path, cli.resource.as_deref())?;
            handlers::categories::handle(&site, format)
        }
        Commands::Consent { command } => {
            let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
            handlers::consent::handle(&ConsentStore::new(&data_dir), command, format)
        }
        Commands::Config { command } => {
            handlers::config::handle(&config_path, cli.resource.as_deref(), command, format)
        }
    }
}

fn open_site(config_path: &Path, resource: Option<&str>) -> Result<Site> {
    Ok(Site::open(config_path, resource)?)
}

/// Logs go to stderr so rendered output on stdout stays clean.
/// `RUST_LOG` wins over `--log-level` when set.
fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

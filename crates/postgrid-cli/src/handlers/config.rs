use super::print_json;
use crate::args::ConfigCommand;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use postgrid_runtime::SiteConfig;
use std::path::Path;

pub fn handle(
    config_path: &Path,
    resource: Option<&str>,
    command: ConfigCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let mut config = SiteConfig::load_from(config_path)?;
            if let Some(resource) = resource {
                config.resource = resource.to_string();
            }
            match format {
                OutputFormat::Json => print_json(&config),
                OutputFormat::Plain => {
                    print!("{}", toml::to_string_pretty(&config)?);
                    Ok(())
                }
            }
        }
        ConfigCommand::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            SiteConfig::default().save_to(config_path)?;
            println!("Wrote {}", config_path.display());
            Ok(())
        }
    }
}

use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "postgrid")]
#[command(about = "Render a static blog's post catalog into page fragments", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $POSTGRID_CONFIG or ./postgrid.toml)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Post list URL or file, overriding the config")]
    pub resource: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Directory for local preferences")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render the homepage grid")]
    Grid,

    #[command(about = "Render the grid for one category")]
    Category {
        #[arg(help = "Category name (case-insensitive)")]
        name: String,
    },

    #[command(about = "Render search results into the grid")]
    Search {
        #[arg(help = "Search text; empty shows every post")]
        query: String,
    },

    #[command(about = "Render an article page")]
    Article {
        #[arg(help = "Page location, e.g. /article?id=my-post or https://host/article/my-post")]
        location: String,
    },

    #[command(about = "List posts in the catalog")]
    Posts,

    #[command(about = "List categories with post counts")]
    Categories,

    #[command(about = "Show or record the cookie consent choice")]
    Consent {
        #[command(subcommand)]
        command: ConsentCommand,
    },

    #[command(about = "Show or create the site configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConsentCommand {
    #[command(about = "Print the stored choice")]
    Show,

    #[command(about = "Record acceptance")]
    Accept,

    #[command(about = "Record refusal")]
    Decline,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

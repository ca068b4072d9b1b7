//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "outcomes-server", version, about = "Learning-outcomes tracking backend")]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Listen address, overrides `bind_addr`
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Database URL, overrides `database_url`
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Seed reference data on startup
    #[arg(long)]
    pub seed: bool,
}

use super::{EcoRoutesAppError, EcoRoutesOperation};
use crate::config::EcoRoutesConfig;
use clap::Parser;

/// explore CO2 emissions and energy use of travel between European cities
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EcoRoutesApp {
    #[command(subcommand)]
    pub op: EcoRoutesOperation,
    /// TOML or JSON configuration file, defaults apply when omitted
    #[arg(long)]
    pub config: Option<String>,
}

impl EcoRoutesApp {
    pub fn run(&self) -> Result<(), EcoRoutesAppError> {
        let config = EcoRoutesConfig::load(self.config.as_deref())?;
        self.op.run(&config)
    }
}

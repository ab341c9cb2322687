use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::DEFAULT_BIND_ADDRESS;
use commands::{print_forecast, serve};

#[derive(Parser)]
#[command(name = "weather-forecast")]
#[command(about = "Random weather forecast HTTP service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,
    },
    /// Print a generated forecast as JSON without starting the server
    ///
    /// Uses the same generator as the HTTP endpoint. Passing a seed makes
    /// the output reproducible for a given date.
    Forecast {
        /// Number of days to forecast
        #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
        days: i32,

        /// Seed for the random source
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::Forecast { days, seed } => {
                print_forecast(days, seed)?;
            }
        }
        Ok(())
    }
}

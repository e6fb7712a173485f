use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

pub mod commands;

use crate::config::ServerConfig;
use commands::{predict, serve};

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(about = "StockCast serving host and prediction client")]
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
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: SocketAddr,

        /// Base URL of the model server that answers POST /predict
        #[arg(long, env = "BACKEND_URL", default_value = "http://127.0.0.1:5000")]
        backend_url: String,

        /// Directory with the built front-end (trunk `dist`)
        #[arg(long, env = "STATIC_DIR")]
        static_dir: Option<PathBuf>,

        /// Seconds to wait for the model server; training can be slow
        #[arg(long, env = "BACKEND_TIMEOUT_SECS", default_value_t = 300)]
        backend_timeout_secs: u64,
    },
    /// Request a prediction and print it
    ///
    /// Dates default to the last three years, like the web form.
    Predict {
        /// Ticker symbol, e.g. AAPL or RELIANCE.NS
        #[arg(short, long)]
        stock: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// StockCast host (or model server) to ask
        #[arg(long, env = "STOCKCAST_SERVER", default_value = "http://127.0.0.1:3000")]
        server: String,

        /// Seconds to wait for the answer
        #[arg(long, default_value_t = 300)]
        timeout_secs: u64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                backend_url,
                static_dir,
                backend_timeout_secs,
            } => {
                let config = ServerConfig::new(bind_address, backend_url, static_dir, backend_timeout_secs);
                serve(config).await?;
            }
            Commands::Predict {
                stock,
                start_date,
                end_date,
                server,
                timeout_secs,
            } => {
                predict(&server, stock, start_date, end_date, timeout_secs).await?;
            }
        }
        Ok(())
    }
}

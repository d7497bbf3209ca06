//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `api_client` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the response
//!
//! All request handling is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::error;

use api_client::config::Opt;
use api_client::initialization::{init_client, init_logger_with};
use api_client::ClientError;

#[tokio::main]
async fn main() -> Result<()> {
    // Load API_CLIENT_* variables from .env before clap reads the environment
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = opt.client_config().context("Invalid client configuration")?;
    let options = opt.request_options().context("Invalid request options")?;
    let client = init_client(config).context("Failed to initialize API client")?;

    match client.request(opt.method.clone(), &opt.path, options).await {
        Ok(response) => {
            println!("HTTP {}", response.status());
            println!("{}", String::from_utf8_lossy(response.body()));
            Ok(())
        }
        Err(e) => {
            error!("{} ({})", e, e.kind());
            if let ClientError::HttpStatus { response, .. } = &e {
                println!("HTTP {}", response.status());
                println!("{}", String::from_utf8_lossy(response.body()));
            }
            eprintln!("api_client error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}

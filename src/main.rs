//! Landscape Lab client - terminal entry point
//!
//! Drives the login, registration and profile pages against a running
//! backend from line commands on stdin.

use std::sync::Arc;

use log::info;
use tokio::io::BufReader;

use landscape_lab_client::config::ClientConfig;
use landscape_lab_client::error::ClientError;
use landscape_lab_client::error::handlers::handle_error;
use landscape_lab_client::terminal::{ConsoleHost, run_session};
use landscape_lab_client::utils::logging::setup_logging;
use landscape_lab_client::{Dispatcher, HttpUserApi};

#[tokio::main]
async fn main() {
    // env_logger picks up RUST_LOG
    setup_logging();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ClientError> {
    let config = ClientConfig::load()?;
    let base_url = config.base_url()?;
    info!("Launching Landscape Lab client against {}", base_url);

    let api = HttpUserApi::new(base_url, config.request_timeout())?;
    let mut dispatcher = Dispatcher::new(Arc::new(api), config.date_format.clone());
    let mut host = ConsoleHost::new(std::io::stdout(), config.output);

    run_session(BufReader::new(tokio::io::stdin()), &mut dispatcher, &mut host).await?;
    info!("Session closed");
    Ok(())
}

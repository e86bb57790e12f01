mod app;
mod components;
mod config;
mod data;
mod error;
mod events;
mod logging;
mod state;
mod theme;
mod utils;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app::App;
use crate::config::Config;
use crate::data::TripService;
use crate::data::contract::{TripContract, TripPortalClient};
use crate::data::explorer::Explorer;
use crate::data::provider::EthProvider;
use crate::data::submission::SubmissionFlow;
use crate::data::wallet::{WalletGateway, WalletProvider};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    if let Some(path) = logging::init(config.log_file.clone())? {
        eprintln!("Logging to {}", path.display());
    }

    // An unreachable endpoint is treated like a missing wallet
    let provider = match config.rpc_url.as_deref() {
        Some(rpc_url) => {
            eprintln!("Connecting to {rpc_url}...");
            match EthProvider::connect(rpc_url).await {
                Ok(provider) => {
                    info!(rpc_url, chain_id = provider.chain_id(), "wallet provider connected");
                    Some(Arc::new(provider))
                }
                Err(e) => {
                    warn!(rpc_url, error = %e, "wallet provider unreachable");
                    eprintln!("Could not reach {rpc_url}: {e}. Continuing without a wallet.");
                    None
                }
            }
        }
        None => {
            eprintln!("No --rpc-url given, starting without a wallet provider");
            None
        }
    };

    // Create event channel
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    if let Some(ref provider) = provider {
        let _ = event_tx.send(events::AppEvent::Connected(provider.chain_id()));
    }

    let wallet = WalletGateway::new(
        provider
            .clone()
            .map(|p| p as Arc<dyn WalletProvider>),
    );
    let contract = provider.clone().map(|p| {
        Arc::new(TripPortalClient::new(
            p,
            config.contract,
            Duration::from_millis(config.receipt_poll_ms),
        )) as Arc<dyn TripContract>
    });
    let submission = SubmissionFlow::new(
        contract.clone(),
        Explorer::new(&config.explorer_url),
        config.gas_limit,
    );
    info!(contract = %config.contract, gas_limit = config.gas_limit, "trip portal configured");

    let provider_present = wallet.has_provider();
    let service = Arc::new(TripService::new(wallet, contract, submission, event_tx));

    // Create app
    let mut app = App::with_service(service, event_rx, provider_present, config.tick_rate_ms);

    // Initialize terminal
    let terminal = ratatui::init();
    let result = app.run(terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}

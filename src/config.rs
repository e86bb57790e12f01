use std::path::PathBuf;

use alloy::primitives::Address;
use clap::Parser;

use crate::data::contract::{DEFAULT_GAS_LIMIT, TRIP_PORTAL_ADDRESS};
use crate::data::explorer::DEFAULT_EXPLORER_URL;

#[derive(Parser, Debug)]
#[command(name = "trip-adder", about = "Submit trip locations to an on-chain trip portal")]
pub struct Config {
    /// Wallet RPC endpoint (must serve eth_accounts / eth_sendTransaction).
    /// When omitted the app starts without a wallet provider.
    #[arg(short, long, env = "TRIP_ADDER_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Trip portal contract address
    #[arg(long, env = "TRIP_ADDER_CONTRACT", default_value_t = TRIP_PORTAL_ADDRESS)]
    pub contract: Address,

    /// Block explorer base URL used for confirmation links
    #[arg(long, env = "TRIP_ADDER_EXPLORER_URL", default_value = DEFAULT_EXPLORER_URL)]
    pub explorer_url: String,

    /// Gas ceiling for addTrip transactions
    #[arg(long, default_value_t = DEFAULT_GAS_LIMIT)]
    pub gas_limit: u64,

    /// Tick rate in milliseconds for UI refresh
    #[arg(long, default_value = "100")]
    pub tick_rate_ms: u64,

    /// Interval in milliseconds between receipt polls while awaiting confirmation
    #[arg(long, default_value = "2000")]
    pub receipt_poll_ms: u64,

    /// Log file (defaults to <data dir>/trip-adder/trip-adder.log)
    #[arg(long, env = "TRIP_ADDER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["trip-adder"]);
        assert!(config.rpc_url.is_none());
        assert_eq!(config.contract, TRIP_PORTAL_ADDRESS);
        assert_eq!(config.explorer_url, DEFAULT_EXPLORER_URL);
        assert_eq!(config.gas_limit, 300_000);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "trip-adder",
            "--rpc-url",
            "http://127.0.0.1:8545",
            "--gas-limit",
            "500000",
            "--contract",
            "0x0000000000000000000000000000000000000001",
        ]);
        assert_eq!(config.rpc_url.as_deref(), Some("http://127.0.0.1:8545"));
        assert_eq!(config.gas_limit, 500_000);
        assert_eq!(config.contract, Address::with_last_byte(1));
    }
}

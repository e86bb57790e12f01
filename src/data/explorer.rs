use alloy::primitives::TxHash;

pub const DEFAULT_EXPLORER_URL: &str = "https://rinkeby.etherscan.io";

/// Builds block explorer links for confirmed transactions.
#[derive(Debug, Clone)]
pub struct Explorer {
    base_url: String,
}

impl Explorer {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// "<base>/tx/<hash>"
    pub fn tx_url(&self, tx_hash: &TxHash) -> String {
        format!("{}/tx/{tx_hash}", self.base_url)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORER_URL)
    }
}

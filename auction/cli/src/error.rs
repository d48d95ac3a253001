//! Error types

use {
    solana_program::pubkey::Pubkey, spl_auction::errors::AuctionError, std::io,
    thiserror::Error,
};

/// Errors that may be returned while building or sending auction transactions.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No bump seed produced a valid auction address for the vault.
    #[error("No valid auction address exists for vault {0}")]
    AuctionAddressNotFound(Pubkey),

    /// The auction program's instruction builder rejected the settings.
    #[error("Auction settings rejected: {0}")]
    Auction(#[from] AuctionError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A settings or program id value could not be interpreted.
    #[error("Invalid value for {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("Failed to read keypair from {path}: {reason}")]
    Keypair { path: String, reason: String },

    #[error(transparent)]
    Rpc(#[from] solana_client::client_error::ClientError),
}

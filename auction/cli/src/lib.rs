//! Client-side tooling for the Auction program: assembling auction creation transactions and
//! rendering SOL amounts with their USD value.

pub mod amount_label;
pub mod config;
pub mod error;
pub mod make_auction;
pub mod settings_utils;

pub use {
    config::ProgramIds,
    error::ClientError,
    make_auction::{make_auction, MakeAuctionOutput, PartialCreateAuctionArgsV2},
};

//! Error types

use {
    num_derive::FromPrimitive,
    solana_program::{
        decode_error::DecodeError,
        msg,
        program_error::{PrintProgramError, ProgramError},
    },
    thiserror::Error,
};

/// Errors that may be returned by the Auction program.
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum AuctionError {
    /// Account does not have correct owner
    #[error("Account does not have correct owner")]
    IncorrectOwner,

    /// NumericalOverflowError
    #[error("NumericalOverflowError")]
    NumericalOverflowError,

    /// No bump seed produced a valid program address.
    #[error("Derived key invalid")]
    DerivedKeyInvalid,

    /// The auction account does not match the pda with seed ['auction', program_id, resource].
    #[error("Auction account specified is invalid.")]
    InvalidAuctionAccount,

    /// The extended data account does not match the pda with seed ['auction', program_id, resource, 'extended'].
    #[error("Auction extended data account specified is invalid.")]
    InvalidAuctionExtendedAccount,

    /// Sysvar or program account passed in the wrong position.
    #[error("Account key does not match the expected key")]
    InvalidAccountKey,

    /// An existing auction belongs to another authority.
    #[error("Existing auction is owned by a different authority")]
    AuctionAuthorityMismatch,

    /// A capped auction needs room for at least one winner.
    #[error("Capped auctions need at least one winner")]
    InvalidWinnerLimit,

    /// Gap tick size percentage must be between 0 and 100.
    #[error("Gap tick size percentage must be between 0 and 100")]
    InvalidGapTickSizePercentage,

    /// Auction end time and gap cannot be negative.
    #[error("Auction end time and gap time cannot be negative")]
    InvalidAuctionTiming,

    /// Instant sale price must meet the minimum price floor.
    #[error("Instant sale price is below the minimum price floor")]
    InvalidInstantSalePrice,

    /// Existing auction account is too small for the requested winner limit.
    #[error("Auction account is too small for the requested winner limit")]
    AuctionAccountTooSmall,
}

impl PrintProgramError for AuctionError {
    fn print<E>(&self) {
        msg!(&self.to_string());
    }
}

impl From<AuctionError> for ProgramError {
    fn from(e: AuctionError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for AuctionError {
    fn type_of() -> &'static str {
        "Auction Error"
    }
}

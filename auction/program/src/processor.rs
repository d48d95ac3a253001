use crate::errors::AuctionError;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo, clock::UnixTimestamp, entrypoint::ProgramResult, hash::Hash, msg,
    program_error::ProgramError, pubkey::Pubkey,
};

// Declare submodules, each contains a single handler for each instruction variant in the program.
pub mod create_auction;
pub mod create_auction_v2;

// Re-export submodules handlers + associated types for other programs to consume.
pub use create_auction::*;
pub use create_auction_v2::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    use crate::instruction::AuctionInstruction;
    match AuctionInstruction::try_from_slice(input)? {
        AuctionInstruction::CreateAuction(args) => {
            msg!("Instruction: Create Auction");
            create_auction(program_id, accounts, args)
        }
        AuctionInstruction::CreateAuctionV2(args) => {
            msg!("Instruction: Create Auction V2");
            create_auction_v2(program_id, accounts, args)
        }
    }
}

/// Structure with pricing floor data.
#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub enum PriceFloor {
    /// Due to borsh on the front end disallowing different arguments in enums, we have to make sure data is
    /// same size across all three
    /// No price floor, any bid is valid.
    None([u8; 32]),
    /// Explicit minimum price, any bid below this is rejected.
    MinimumPrice([u64; 4]),
    /// Hidden minimum price, revealed at the end of the auction.
    BlindedPrice(Hash),
}

impl PriceFloor {
    /// The explicit minimum price, zero for unpriced and blinded floors.
    pub fn minimum(&self) -> u64 {
        match self {
            PriceFloor::MinimumPrice(min) => min[0],
            _ => 0,
        }
    }
}

/// Optional 32 byte label stored alongside the auction.
pub type AuctionName = Option<[u8; 32]>;

// The two extra 8's are present, one 8 is for the Vec's amount of elements and one is for the max
// usize in bid state.
pub const BASE_AUCTION_DATA_SIZE: usize = 32 + 32 + 32 + 9 + 9 + 9 + 9 + 1 + 32 + 1 + 8 + 8;

pub const MAX_AUCTION_DATA_EXTENDED_SIZE: usize = 8 + 9 + 2 + 9 + 33 + 158;

#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub struct AuctionData {
    /// Pubkey of the authority with permission to modify this auction.
    pub authority: Pubkey,
    /// Pubkey of the resource being bid on.
    pub resource: Pubkey,
    /// Token mint for the SPL token being used to bid
    pub token_mint: Pubkey,
    /// The time the last bid was placed, used to keep track of auction timing.
    pub last_bid: Option<UnixTimestamp>,
    /// Unix timestamp the auction was officially ended by.
    pub ended_at: Option<UnixTimestamp>,
    /// End time is the cut-off point that the auction is forced to end by.
    pub end_auction_at: Option<UnixTimestamp>,
    /// Gap time is the amount of time in seconds after the previous bid at which the auction ends.
    pub end_auction_gap: Option<UnixTimestamp>,
    /// Minimum price for any bid to meet.
    pub price_floor: PriceFloor,
    /// The state the auction is in, whether it has started or ended.
    pub state: AuctionState,
    /// Auction Bids, each user may have one bid open at a time.
    pub bid_state: BidState,
}

/// Settings introduced with CreateAuctionV2, stored in a pda next to the auction.
#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub struct AuctionDataExtended {
    /// Total uncancelled bids
    pub total_uncancelled_bids: u64,
    /// Minimum step between two consecutive bids.
    pub tick_size: Option<u64>,
    /// Percentage of the previous bid a bid placed within the gap window must add.
    pub gap_tick_size_percentage: Option<u8>,
    /// Price at which the auction sells immediately.
    pub instant_sale_price: Option<u64>,
    /// Auction name
    pub name: AuctionName,
}

/// Define valid auction state transitions.
#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub enum AuctionState {
    Created,
    Started,
    Ended,
}

impl AuctionState {
    pub fn create() -> Self {
        AuctionState::Created
    }
}

/// Bids associate a bidding key with an amount bid.
#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub struct Bid(pub Pubkey, pub u64);

/// BidState tracks the running state of an auction, each variant represents a different kind of
/// auction being run.
#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub enum BidState {
    EnglishAuction { bids: Vec<Bid>, max: usize },
    OpenEdition { bids: Vec<Bid>, max: usize },
}

impl BidState {
    pub fn new_english(n: usize) -> Self {
        BidState::EnglishAuction {
            bids: vec![],
            max: n,
        }
    }

    pub fn new_open_edition() -> Self {
        BidState::OpenEdition {
            bids: vec![],
            max: 0,
        }
    }
}

#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub enum WinnerLimit {
    Unlimited(usize),
    Capped(usize),
}

impl WinnerLimit {
    /// Bytes the auction account needs to track this many winners.
    pub fn auction_size(&self) -> Result<usize, ProgramError> {
        match self {
            WinnerLimit::Capped(n) => std::mem::size_of::<Bid>()
                .checked_mul(*n)
                .and_then(|bids| bids.checked_add(BASE_AUCTION_DATA_SIZE))
                .ok_or_else(|| AuctionError::NumericalOverflowError.into()),
            WinnerLimit::Unlimited(_) => Ok(BASE_AUCTION_DATA_SIZE),
        }
    }

    pub fn bid_state(&self) -> BidState {
        match self {
            WinnerLimit::Capped(n) => BidState::new_english(*n),
            WinnerLimit::Unlimited(_) => BidState::new_open_edition(),
        }
    }
}

use {
    crate::{
        errors::AuctionError,
        processor::{create_auction_v2, CreateAuctionArgsV2, PriceFloor, WinnerLimit},
    },
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        account_info::AccountInfo, clock::UnixTimestamp, entrypoint::ProgramResult,
        pubkey::Pubkey,
    },
};

#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub struct CreateAuctionArgs {
    /// How many winners are allowed for this auction. See AuctionData.
    pub winners: WinnerLimit,
    /// End time is the cut-off point that the auction is forced to end by. See AuctionData.
    pub end_auction_at: Option<UnixTimestamp>,
    /// Gap time is how much time after the previous bid where the auction ends. See AuctionData.
    pub end_auction_gap: Option<UnixTimestamp>,
    /// Token mint for the SPL token used for bidding.
    pub token_mint: Pubkey,
    /// Authority
    pub authority: Pubkey,
    /// The resource being auctioned. See AuctionData.
    pub resource: Pubkey,
    /// Set a price floor.
    pub price_floor: PriceFloor,
    /// Add a tick size increment
    pub tick_size: Option<u64>,
    /// Add a minimum percentage increase each bid must meet.
    pub gap_tick_size_percentage: Option<u8>,
}

impl CreateAuctionArgs {
    pub fn validate(&self) -> Result<(), AuctionError> {
        CreateAuctionArgsV2::from(self.clone()).validate()
    }
}

impl From<CreateAuctionArgs> for CreateAuctionArgsV2 {
    fn from(args: CreateAuctionArgs) -> Self {
        CreateAuctionArgsV2 {
            winners: args.winners,
            end_auction_at: args.end_auction_at,
            end_auction_gap: args.end_auction_gap,
            token_mint: args.token_mint,
            authority: args.authority,
            resource: args.resource,
            price_floor: args.price_floor,
            tick_size: args.tick_size,
            gap_tick_size_percentage: args.gap_tick_size_percentage,
            instant_sale_price: None,
            name: None,
        }
    }
}

/// A V1 auction is a V2 auction without an instant sale price or a name.
pub fn create_auction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: CreateAuctionArgs,
) -> ProgramResult {
    create_auction_v2(program_id, accounts, args.into())
}

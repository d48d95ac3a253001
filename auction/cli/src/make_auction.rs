use {
    crate::{config::ProgramIds, error::ClientError},
    log::{debug, warn},
    solana_program::{clock::UnixTimestamp, instruction::Instruction, pubkey::Pubkey},
    solana_sdk::signature::Keypair,
    spl_auction::{
        find_auction_address,
        instruction::create_auction_instruction_v2,
        processor::{AuctionName, CreateAuctionArgsV2, PriceFloor, WinnerLimit},
    },
};

/// Auction settings as supplied by the caller, before they are bound to a wallet and a vault.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialCreateAuctionArgsV2 {
    pub winners: WinnerLimit,
    pub end_auction_at: Option<UnixTimestamp>,
    pub end_auction_gap: Option<UnixTimestamp>,
    pub token_mint: Pubkey,
    pub price_floor: PriceFloor,
    pub tick_size: Option<u64>,
    pub gap_tick_size_percentage: Option<u8>,
    pub instant_sale_price: Option<u64>,
    pub name: AuctionName,
    /// Never used as given, `complete` replaces it with the wallet.
    pub authority: Option<Pubkey>,
    /// Never used as given, `complete` replaces it with the vault.
    pub resource: Option<Pubkey>,
}

impl PartialCreateAuctionArgsV2 {
    /// Settings with no end time, no gap, no floor and no extras.
    pub fn new(winners: WinnerLimit, token_mint: Pubkey) -> Self {
        PartialCreateAuctionArgsV2 {
            winners,
            end_auction_at: None,
            end_auction_gap: None,
            token_mint,
            price_floor: PriceFloor::None([0; 32]),
            tick_size: None,
            gap_tick_size_percentage: None,
            instant_sale_price: None,
            name: None,
            authority: None,
            resource: None,
        }
    }

    /// Binds the settings to an authority and a resource.
    ///
    /// Every field is carried over unchanged except `authority` and `resource`, which always take
    /// the values passed here, whatever the partial settings held.
    pub fn complete(self, authority: Pubkey, resource: Pubkey) -> CreateAuctionArgsV2 {
        if let Some(supplied) = self.authority.filter(|key| *key != authority) {
            warn!(
                "Ignoring authority {} from settings, using {}",
                supplied, authority
            );
        }
        if let Some(supplied) = self.resource.filter(|key| *key != resource) {
            warn!(
                "Ignoring resource {} from settings, using {}",
                supplied, resource
            );
        }

        CreateAuctionArgsV2 {
            winners: self.winners,
            end_auction_at: self.end_auction_at,
            end_auction_gap: self.end_auction_gap,
            token_mint: self.token_mint,
            authority,
            resource,
            price_floor: self.price_floor,
            tick_size: self.tick_size,
            gap_tick_size_percentage: self.gap_tick_size_percentage,
            instant_sale_price: self.instant_sale_price,
            name: self.name,
        }
    }
}

/// Instructions and extra signers that create an auction, plus the auction's address.
#[derive(Debug)]
pub struct MakeAuctionOutput {
    pub auction: Pubkey,
    pub instructions: Vec<Instruction>,
    /// Signers required on top of the wallet. Creating an auction needs none.
    pub signers: Vec<Keypair>,
}

/// Builds the instructions that create an auction over `vault`, with `wallet` as both payer and
/// authority. Nothing is signed or sent.
pub fn make_auction(
    wallet: &Pubkey,
    vault: &Pubkey,
    auction_settings: PartialCreateAuctionArgsV2,
    program_ids: &ProgramIds,
) -> Result<MakeAuctionOutput, ClientError> {
    let signers: Vec<Keypair> = vec![];
    let mut instructions: Vec<Instruction> = vec![];

    let (auction, _) = find_auction_address(&program_ids.auction, vault)
        .ok_or(ClientError::AuctionAddressNotFound(*vault))?;

    let full_settings = auction_settings.complete(*wallet, *vault);

    instructions.push(create_auction_instruction_v2(
        program_ids.auction,
        *wallet,
        full_settings,
    )?);

    debug!(
        "Built {} instruction(s) for auction {} over vault {}",
        instructions.len(),
        auction,
        vault
    );

    Ok(MakeAuctionOutput {
        auction,
        instructions,
        signers,
    })
}

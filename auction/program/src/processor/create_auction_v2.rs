use {
    crate::{
        errors::AuctionError,
        find_auction_address, find_auction_extended_address,
        processor::{
            AuctionData, AuctionDataExtended, AuctionName, AuctionState, PriceFloor, WinnerLimit,
            MAX_AUCTION_DATA_EXTENDED_SIZE,
        },
        utils::{assert_account_key, assert_owned_by, assert_signer, create_or_allocate_account_raw},
        EXTENDED, PREFIX,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        account_info::{next_account_info, AccountInfo},
        borsh1::try_from_slice_unchecked,
        clock::UnixTimestamp,
        entrypoint::ProgramResult,
        msg,
        program_error::ProgramError,
        pubkey::Pubkey,
        system_program, sysvar,
    },
};

#[repr(C)]
#[derive(Clone, BorshSerialize, BorshDeserialize, PartialEq, Debug)]
pub struct CreateAuctionArgsV2 {
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
    /// Add a instant sale price.
    pub instant_sale_price: Option<u64>,
    /// Auction name
    pub name: AuctionName,
}

impl CreateAuctionArgsV2 {
    /// Rejects argument combinations the program would never accept. Used both when building the
    /// instruction and when processing it.
    pub fn validate(&self) -> Result<(), AuctionError> {
        if self.winners == WinnerLimit::Capped(0) {
            return Err(AuctionError::InvalidWinnerLimit);
        }

        if matches!(self.end_auction_at, Some(at) if at < 0)
            || matches!(self.end_auction_gap, Some(gap) if gap < 0)
        {
            return Err(AuctionError::InvalidAuctionTiming);
        }

        if let Some(percentage) = self.gap_tick_size_percentage {
            if percentage > 100 {
                return Err(AuctionError::InvalidGapTickSizePercentage);
            }
        }

        if let Some(price) = self.instant_sale_price {
            if price < self.price_floor.minimum() {
                return Err(AuctionError::InvalidInstantSalePrice);
            }
        }

        Ok(())
    }
}

struct Accounts<'a, 'b: 'a> {
    payer: &'a AccountInfo<'b>,
    auction: &'a AccountInfo<'b>,
    auction_extended: &'a AccountInfo<'b>,
    rent: &'a AccountInfo<'b>,
    system: &'a AccountInfo<'b>,
}

fn parse_accounts<'a, 'b: 'a>(
    accounts: &'a [AccountInfo<'b>],
) -> Result<Accounts<'a, 'b>, ProgramError> {
    let account_iter = &mut accounts.iter();
    let accounts = Accounts {
        payer: next_account_info(account_iter)?,
        auction: next_account_info(account_iter)?,
        auction_extended: next_account_info(account_iter)?,
        rent: next_account_info(account_iter)?,
        system: next_account_info(account_iter)?,
    };
    assert_signer(accounts.payer)?;
    assert_account_key(accounts.rent, &sysvar::rent::id())?;
    assert_account_key(accounts.system, &system_program::id())?;
    Ok(accounts)
}

pub fn create_auction_v2(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    args: CreateAuctionArgsV2,
) -> ProgramResult {
    msg!("+ Processing CreateAuction");
    let accounts = parse_accounts(accounts)?;
    args.validate()?;

    // Derive the addresses we'll store the auction in, and confirm they match what we expected the
    // user to provide.
    let (auction_key, bump) = find_auction_address(program_id, &args.resource)
        .ok_or(AuctionError::DerivedKeyInvalid)?;
    if auction_key != *accounts.auction.key {
        return Err(AuctionError::InvalidAuctionAccount.into());
    }

    let (extended_key, extended_bump) = find_auction_extended_address(program_id, &args.resource)
        .ok_or(AuctionError::DerivedKeyInvalid)?;
    if extended_key != *accounts.auction_extended.key {
        return Err(AuctionError::InvalidAuctionExtendedAccount.into());
    }

    // The data must be large enough to hold at least the number of winners.
    let auction_size = args.winners.auction_size()?;

    if accounts.auction.data_is_empty() {
        create_or_allocate_account_raw(
            *program_id,
            accounts.auction,
            accounts.rent,
            accounts.system,
            accounts.payer,
            auction_size,
            &[
                PREFIX.as_bytes(),
                program_id.as_ref(),
                args.resource.as_ref(),
                &[bump],
            ],
        )?;
    } else {
        assert_owned_by(accounts.auction, program_id)?;
        let parsed: AuctionData = try_from_slice_unchecked(&accounts.auction.data.borrow())?;
        // Only the stored authority, signing as payer, may reconfigure an existing auction.
        if parsed.authority != *accounts.payer.key || parsed.authority != args.authority {
            msg!("Invalid authority for already existing auction");
            return Err(AuctionError::AuctionAuthorityMismatch.into());
        }
        if accounts.auction.data_len() < auction_size {
            return Err(AuctionError::AuctionAccountTooSmall.into());
        }
    }

    if accounts.auction_extended.data_is_empty() {
        create_or_allocate_account_raw(
            *program_id,
            accounts.auction_extended,
            accounts.rent,
            accounts.system,
            accounts.payer,
            MAX_AUCTION_DATA_EXTENDED_SIZE,
            &[
                PREFIX.as_bytes(),
                program_id.as_ref(),
                args.resource.as_ref(),
                EXTENDED.as_bytes(),
                &[extended_bump],
            ],
        )?;
    } else {
        assert_owned_by(accounts.auction_extended, program_id)?;
    }

    // Configure Auction.
    AuctionData {
        authority: args.authority,
        bid_state: args.winners.bid_state(),
        resource: args.resource,
        end_auction_at: args.end_auction_at,
        end_auction_gap: args.end_auction_gap,
        ended_at: None,
        last_bid: None,
        price_floor: args.price_floor,
        state: AuctionState::create(),
        token_mint: args.token_mint,
    }
    .serialize(&mut *accounts.auction.data.borrow_mut())?;

    AuctionDataExtended {
        total_uncancelled_bids: 0,
        tick_size: args.tick_size,
        gap_tick_size_percentage: args.gap_tick_size_percentage,
        instant_sale_price: args.instant_sale_price,
        name: args.name,
    }
    .serialize(&mut *accounts.auction_extended.data.borrow_mut())?;

    Ok(())
}

use {
    crate::{
        errors::AuctionError,
        find_auction_address, find_auction_extended_address,
        processor::{CreateAuctionArgs, CreateAuctionArgsV2},
    },
    borsh::{BorshDeserialize, BorshSerialize},
    solana_program::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program, sysvar,
    },
};

/// Instructions supported by the Auction program.
#[derive(BorshSerialize, BorshDeserialize, Clone, PartialEq, Debug)]
pub enum AuctionInstruction {
    /// Create a new auction account bound to a resource, initially in a pending state.
    ///   0. `[signer, writable]` The account creating the auction, which pays for the new accounts.
    ///   1. `[writable]` Uninitialized auction account, pda of ['auction', program id, resource].
    ///   2. `[writable]` Uninitialized extended auction data account, pda of
    ///        ['auction', program id, resource, 'extended'].
    ///   3. `[]` Rent sysvar
    ///   4. `[]` System account
    CreateAuction(CreateAuctionArgs),

    /// Same as CreateAuction, additionally storing an instant sale price and a name in the
    /// extended auction data account. Accounts are identical.
    CreateAuctionV2(CreateAuctionArgsV2),
}

fn create_auction_accounts(
    program_id: &Pubkey,
    creator_pubkey: &Pubkey,
    resource: &Pubkey,
) -> Result<Vec<AccountMeta>, AuctionError> {
    let (auction_pubkey, _) =
        find_auction_address(program_id, resource).ok_or(AuctionError::DerivedKeyInvalid)?;
    let (auction_extended_pubkey, _) = find_auction_extended_address(program_id, resource)
        .ok_or(AuctionError::DerivedKeyInvalid)?;

    Ok(vec![
        AccountMeta::new(*creator_pubkey, true),
        AccountMeta::new(auction_pubkey, false),
        AccountMeta::new(auction_extended_pubkey, false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ])
}

/// Creates an CreateAuction instruction.
pub fn create_auction_instruction(
    program_id: Pubkey,
    creator_pubkey: Pubkey,
    args: CreateAuctionArgs,
) -> Result<Instruction, AuctionError> {
    args.validate()?;
    let accounts = create_auction_accounts(&program_id, &creator_pubkey, &args.resource)?;
    Ok(Instruction::new_with_borsh(
        program_id,
        &AuctionInstruction::CreateAuction(args),
        accounts,
    ))
}

/// Creates an CreateAuctionV2 instruction.
pub fn create_auction_instruction_v2(
    program_id: Pubkey,
    creator_pubkey: Pubkey,
    args: CreateAuctionArgsV2,
) -> Result<Instruction, AuctionError> {
    args.validate()?;
    let accounts = create_auction_accounts(&program_id, &creator_pubkey, &args.resource)?;
    Ok(Instruction::new_with_borsh(
        program_id,
        &AuctionInstruction::CreateAuctionV2(args),
        accounts,
    ))
}

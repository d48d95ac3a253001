use {
    solana_program::{
        borsh1::try_from_slice_unchecked,
        instruction::{AccountMeta, InstructionError},
        system_instruction,
    },
    solana_program_test::*,
    solana_sdk::{
        pubkey::Pubkey,
        signature::{Keypair, Signer},
        transaction::{Transaction, TransactionError},
        transport::TransportError,
    },
    spl_auction::{
        errors::AuctionError,
        find_auction_address, find_auction_extended_address,
        instruction::{create_auction_instruction, create_auction_instruction_v2},
        processor::{
            process_instruction, AuctionData, AuctionDataExtended, AuctionState, BidState,
            CreateAuctionArgs, CreateAuctionArgsV2, PriceFloor, WinnerLimit,
            MAX_AUCTION_DATA_EXTENDED_SIZE,
        },
    },
};

fn program_test() -> ProgramTest {
    ProgramTest::new(
        "spl_auction",
        spl_auction::id(),
        processor!(process_instruction),
    )
}

fn v2_args(authority: Pubkey, resource: Pubkey) -> CreateAuctionArgsV2 {
    CreateAuctionArgsV2 {
        winners: WinnerLimit::Capped(3),
        end_auction_at: Some(1_700_000_000),
        end_auction_gap: Some(600),
        token_mint: Pubkey::new_unique(),
        authority,
        resource,
        price_floor: PriceFloor::MinimumPrice([1_000, 0, 0, 0]),
        tick_size: Some(100),
        gap_tick_size_percentage: Some(10),
        instant_sale_price: Some(5_000),
        name: Some(*b"genesis auction\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0"),
    }
}

async fn send(
    context: &mut ProgramTestContext,
    instruction: solana_program::instruction::Instruction,
) -> Result<(), TransportError> {
    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&context.payer.pubkey()),
        &[&context.payer],
        context.last_blockhash,
    );
    context.banks_client.process_transaction(tx).await.map_err(Into::into)
}

async fn send_as(
    context: &mut ProgramTestContext,
    instruction: solana_program::instruction::Instruction,
    signer: &Keypair,
) -> Result<(), TransportError> {
    let tx = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&signer.pubkey()),
        &[signer],
        context.last_blockhash,
    );
    context.banks_client.process_transaction(tx).await.map_err(Into::into)
}

async fn funded_keypair(context: &mut ProgramTestContext) -> Keypair {
    let keypair = Keypair::new();
    let instruction = system_instruction::transfer(
        &context.payer.pubkey(),
        &keypair.pubkey(),
        1_000_000_000,
    );
    send(context, instruction).await.unwrap();
    keypair
}

async fn auction_data(context: &mut ProgramTestContext, resource: &Pubkey) -> AuctionData {
    let (auction_key, _) = find_auction_address(&spl_auction::id(), resource).unwrap();
    let account = context
        .banks_client
        .get_account(auction_key)
        .await
        .unwrap()
        .unwrap();
    try_from_slice_unchecked(&account.data).unwrap()
}

fn assert_custom_error(result: Result<(), TransportError>, expected: AuctionError) {
    match result {
        Err(TransportError::TransactionError(TransactionError::InstructionError(
            0,
            InstructionError::Custom(code),
        ))) => assert_eq!(code, expected as u32),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn create_auction_v2_writes_auction_and_extended_data() {
    let mut context = program_test().start_with_context().await;
    let authority = Pubkey::new_unique();
    let resource = Pubkey::new_unique();
    let args = v2_args(authority, resource);

    let instruction =
        create_auction_instruction_v2(spl_auction::id(), context.payer.pubkey(), args.clone())
            .unwrap();
    send(&mut context, instruction).await.unwrap();

    let (auction_key, _) = find_auction_address(&spl_auction::id(), &resource).unwrap();
    let account = context
        .banks_client
        .get_account(auction_key)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.owner, spl_auction::id());
    assert_eq!(account.data.len(), args.winners.auction_size().unwrap());

    let auction: AuctionData = try_from_slice_unchecked(&account.data).unwrap();
    assert_eq!(auction.authority, authority);
    assert_eq!(auction.resource, resource);
    assert_eq!(auction.token_mint, args.token_mint);
    assert_eq!(auction.end_auction_at, args.end_auction_at);
    assert_eq!(auction.end_auction_gap, args.end_auction_gap);
    assert_eq!(auction.price_floor, args.price_floor);
    assert_eq!(auction.state, AuctionState::Created);
    assert_eq!(auction.bid_state, BidState::new_english(3));
    assert_eq!(auction.last_bid, None);

    let (extended_key, _) = find_auction_extended_address(&spl_auction::id(), &resource).unwrap();
    let account = context
        .banks_client
        .get_account(extended_key)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.data.len(), MAX_AUCTION_DATA_EXTENDED_SIZE);
    let extended: AuctionDataExtended = try_from_slice_unchecked(&account.data).unwrap();
    assert_eq!(extended.total_uncancelled_bids, 0);
    assert_eq!(extended.tick_size, Some(100));
    assert_eq!(extended.gap_tick_size_percentage, Some(10));
    assert_eq!(extended.instant_sale_price, Some(5_000));
    assert_eq!(extended.name, args.name);
}

#[tokio::test]
async fn create_auction_v1_leaves_v2_fields_empty() {
    let mut context = program_test().start_with_context().await;
    let resource = Pubkey::new_unique();
    let args = CreateAuctionArgs {
        winners: WinnerLimit::Unlimited(0),
        end_auction_at: None,
        end_auction_gap: None,
        token_mint: Pubkey::new_unique(),
        authority: context.payer.pubkey(),
        resource,
        price_floor: PriceFloor::None([0; 32]),
        tick_size: None,
        gap_tick_size_percentage: None,
    };

    let instruction =
        create_auction_instruction(spl_auction::id(), context.payer.pubkey(), args).unwrap();
    send(&mut context, instruction).await.unwrap();

    let (auction_key, _) = find_auction_address(&spl_auction::id(), &resource).unwrap();
    let account = context
        .banks_client
        .get_account(auction_key)
        .await
        .unwrap()
        .unwrap();
    let auction: AuctionData = try_from_slice_unchecked(&account.data).unwrap();
    assert_eq!(auction.bid_state, BidState::new_open_edition());

    let (extended_key, _) = find_auction_extended_address(&spl_auction::id(), &resource).unwrap();
    let account = context
        .banks_client
        .get_account(extended_key)
        .await
        .unwrap()
        .unwrap();
    let extended: AuctionDataExtended = try_from_slice_unchecked(&account.data).unwrap();
    assert_eq!(extended.instant_sale_price, None);
    assert_eq!(extended.name, None);
}

#[tokio::test]
async fn existing_auction_keeps_its_authority() {
    let mut context = program_test().start_with_context().await;
    let resource = Pubkey::new_unique();

    let instruction = create_auction_instruction_v2(
        spl_auction::id(),
        context.payer.pubkey(),
        v2_args(Pubkey::new_unique(), resource),
    )
    .unwrap();
    send(&mut context, instruction).await.unwrap();

    let instruction = create_auction_instruction_v2(
        spl_auction::id(),
        context.payer.pubkey(),
        v2_args(Pubkey::new_unique(), resource),
    )
    .unwrap();
    let result = send(&mut context, instruction).await;
    assert_custom_error(result, AuctionError::AuctionAuthorityMismatch);
}

#[tokio::test]
async fn rejects_auction_account_off_the_derivation() {
    let mut context = program_test().start_with_context().await;
    let mut instruction = create_auction_instruction_v2(
        spl_auction::id(),
        context.payer.pubkey(),
        v2_args(Pubkey::new_unique(), Pubkey::new_unique()),
    )
    .unwrap();
    instruction.accounts[1].pubkey = Pubkey::new_unique();

    let result = send(&mut context, instruction).await;
    assert_custom_error(result, AuctionError::InvalidAuctionAccount);
}

#[tokio::test]
async fn authority_can_reconfigure_its_auction() {
    let mut context = program_test().start_with_context().await;
    let authority = context.payer.pubkey();
    let resource = Pubkey::new_unique();

    let instruction =
        create_auction_instruction_v2(spl_auction::id(), authority, v2_args(authority, resource))
            .unwrap();
    send(&mut context, instruction).await.unwrap();

    let mut args = v2_args(authority, resource);
    args.price_floor = PriceFloor::MinimumPrice([2_000, 0, 0, 0]);
    let instruction = create_auction_instruction_v2(spl_auction::id(), authority, args).unwrap();
    send(&mut context, instruction).await.unwrap();

    let auction = auction_data(&mut context, &resource).await;
    assert_eq!(
        auction.price_floor,
        PriceFloor::MinimumPrice([2_000, 0, 0, 0])
    );
}

#[tokio::test]
async fn stranger_naming_the_authority_cannot_reconfigure() {
    let mut context = program_test().start_with_context().await;
    let authority = context.payer.pubkey();
    let resource = Pubkey::new_unique();

    let instruction =
        create_auction_instruction_v2(spl_auction::id(), authority, v2_args(authority, resource))
            .unwrap();
    send(&mut context, instruction).await.unwrap();

    let stranger = funded_keypair(&mut context).await;
    let mut args = v2_args(authority, resource);
    args.price_floor = PriceFloor::MinimumPrice([1, 0, 0, 0]);
    args.instant_sale_price = Some(1);
    let instruction =
        create_auction_instruction_v2(spl_auction::id(), stranger.pubkey(), args).unwrap();
    let result = send_as(&mut context, instruction, &stranger).await;
    assert_custom_error(result, AuctionError::AuctionAuthorityMismatch);

    let auction = auction_data(&mut context, &resource).await;
    assert_eq!(auction.authority, authority);
    assert_eq!(
        auction.price_floor,
        PriceFloor::MinimumPrice([1_000, 0, 0, 0])
    );
}

#[tokio::test]
async fn existing_auction_too_small_for_more_winners() {
    let mut context = program_test().start_with_context().await;
    let authority = context.payer.pubkey();
    let resource = Pubkey::new_unique();

    let mut args = v2_args(authority, resource);
    args.winners = WinnerLimit::Capped(1);
    let instruction = create_auction_instruction_v2(spl_auction::id(), authority, args).unwrap();
    send(&mut context, instruction).await.unwrap();

    let mut args = v2_args(authority, resource);
    args.winners = WinnerLimit::Capped(50);
    let instruction = create_auction_instruction_v2(spl_auction::id(), authority, args).unwrap();
    let result = send(&mut context, instruction).await;
    assert_custom_error(result, AuctionError::AuctionAccountTooSmall);
}

#[tokio::test]
async fn rejects_extended_account_off_the_derivation() {
    let mut context = program_test().start_with_context().await;
    let mut instruction = create_auction_instruction_v2(
        spl_auction::id(),
        context.payer.pubkey(),
        v2_args(Pubkey::new_unique(), Pubkey::new_unique()),
    )
    .unwrap();
    instruction.accounts[2].pubkey = Pubkey::new_unique();

    let result = send(&mut context, instruction).await;
    assert_custom_error(result, AuctionError::InvalidAuctionExtendedAccount);
}

#[tokio::test]
async fn rejects_payer_that_did_not_sign() {
    let mut context = program_test().start_with_context().await;
    let mut instruction = create_auction_instruction_v2(
        spl_auction::id(),
        context.payer.pubkey(),
        v2_args(Pubkey::new_unique(), Pubkey::new_unique()),
    )
    .unwrap();
    instruction.accounts[0] = AccountMeta::new(Pubkey::new_unique(), false);

    match send(&mut context, instruction).await {
        Err(TransportError::TransactionError(TransactionError::InstructionError(
            0,
            InstructionError::MissingRequiredSignature,
        ))) => {}
        other => panic!("expected missing signature, got {:?}", other),
    }
}

#[tokio::test]
async fn rejects_wrong_sysvar_and_system_accounts() {
    let mut context = program_test().start_with_context().await;
    let resource = Pubkey::new_unique();

    let mut instruction = create_auction_instruction_v2(
        spl_auction::id(),
        context.payer.pubkey(),
        v2_args(Pubkey::new_unique(), resource),
    )
    .unwrap();
    instruction.accounts[3].pubkey = Pubkey::new_unique();
    let result = send(&mut context, instruction).await;
    assert_custom_error(result, AuctionError::InvalidAccountKey);

    let mut instruction = create_auction_instruction_v2(
        spl_auction::id(),
        context.payer.pubkey(),
        v2_args(Pubkey::new_unique(), resource),
    )
    .unwrap();
    instruction.accounts[4].pubkey = Pubkey::new_unique();
    let result = send(&mut context, instruction).await;
    assert_custom_error(result, AuctionError::InvalidAccountKey);
}

use {
    clap::{
        crate_description, crate_name, crate_version, App, AppSettings, Arg, ArgMatches,
        SubCommand,
    },
    log::{error, info},
    solana_clap_utils::{
        input_parsers::pubkey_of,
        input_validators::{is_parsable, is_url, is_valid_pubkey, is_valid_signer},
    },
    solana_client::rpc_client::RpcClient,
    solana_sdk::{
        pubkey::Pubkey,
        signature::{read_keypair_file, Signer},
        transaction::Transaction,
    },
    spl_auction::{find_auction_address, find_auction_extended_address},
    spl_auction_client::{
        amount_label::{AmountLabel, AmountLabelOptions, StaticPriceFeed, UsdFormatter},
        config::{load_cli_config, ProgramIds},
        make_auction,
        settings_utils::parse_settings,
        ClientError,
    },
};

fn program_ids_of(app_matches: &ArgMatches) -> Result<ProgramIds, ClientError> {
    match app_matches.value_of("program_ids") {
        Some(path) => ProgramIds::from_file(path),
        None => Ok(ProgramIds::default()),
    }
}

fn required_pubkey(matches: &ArgMatches, name: &'static str) -> Result<Pubkey, ClientError> {
    pubkey_of(matches, name).ok_or_else(|| ClientError::InvalidSetting {
        field: name,
        reason: "missing or not a pubkey".to_owned(),
    })
}

fn create(app_matches: &ArgMatches, sub_matches: &ArgMatches) -> Result<(), ClientError> {
    let cli_config = load_cli_config(app_matches.value_of("config_file"))?;
    let program_ids = program_ids_of(app_matches)?;
    let keypair_path = app_matches
        .value_of("keypair")
        .map(str::to_owned)
        .unwrap_or(cli_config.keypair_path);
    let payer = read_keypair_file(&keypair_path).map_err(|err| ClientError::Keypair {
        path: keypair_path.clone(),
        reason: err.to_string(),
    })?;

    let vault = required_pubkey(sub_matches, "vault")?;
    let settings_file = sub_matches.value_of("settings_file").unwrap_or_default();
    let (settings, _) = parse_settings(settings_file)?;

    let output = make_auction(&payer.pubkey(), &vault, settings, &program_ids)?;
    info!(
        "Prepared {} instruction(s) for auction {}",
        output.instructions.len(),
        output.auction
    );

    if sub_matches.is_present("dry_run") {
        for instruction in &output.instructions {
            println!("{:?}", instruction);
        }
        println!("Auction address {}", output.auction);
        return Ok(());
    }

    let client = RpcClient::new(
        app_matches
            .value_of("json_rpc_url")
            .map(str::to_owned)
            .unwrap_or(cli_config.json_rpc_url),
    );
    let (recent_blockhash, _) = client.get_recent_blockhash()?;

    let mut signers: Vec<&dyn Signer> = vec![&payer];
    for signer in &output.signers {
        signers.push(signer);
    }
    let transaction = Transaction::new_signed_with_payer(
        &output.instructions,
        Some(&payer.pubkey()),
        &signers,
        recent_blockhash,
    );
    let signature = client.send_and_confirm_transaction(&transaction)?;

    println!(
        "Created auction {} in transaction {}",
        output.auction, signature
    );
    Ok(())
}

fn derive_addresses(
    app_matches: &ArgMatches,
    sub_matches: &ArgMatches,
) -> Result<(), ClientError> {
    let program_ids = program_ids_of(app_matches)?;
    let vault = required_pubkey(sub_matches, "vault")?;

    let (auction, bump) = find_auction_address(&program_ids.auction, &vault)
        .ok_or(ClientError::AuctionAddressNotFound(vault))?;
    let (extended, extended_bump) = find_auction_extended_address(&program_ids.auction, &vault)
        .ok_or(ClientError::AuctionAddressNotFound(vault))?;

    println!("Auction: {} (bump {})", auction, bump);
    println!("Auction extended: {} (bump {})", extended, extended_bump);
    Ok(())
}

fn label(sub_matches: &ArgMatches) -> Result<(), ClientError> {
    let amount = sub_matches.value_of("amount").unwrap_or_default();
    let sol_price = match sub_matches.value_of("sol_price") {
        Some(price) => price
            .parse::<f64>()
            .map_err(|err| ClientError::InvalidSetting {
                field: "sol_price",
                reason: err.to_string(),
            })?,
        None => 0.0,
    };

    let mut label = AmountLabel::new(
        amount,
        AmountLabelOptions {
            display_usd: !sub_matches.is_present("no_usd"),
            title: sub_matches.value_of("title").unwrap_or_default().to_owned(),
        },
    );
    label.sync(&StaticPriceFeed(sol_price));
    println!("{}", label.render(&UsdFormatter));
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_matches = App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("keypair")
                .long("keypair")
                .value_name("KEYPAIR")
                .validator(is_valid_signer)
                .takes_value(true)
                .global(true)
                .help("Filepath or URL to a keypair [default: from the Solana CLI config]"),
        )
        .arg(
            Arg::with_name("json_rpc_url")
                .long("url")
                .value_name("URL")
                .takes_value(true)
                .global(true)
                .validator(is_url)
                .help("JSON RPC URL for the cluster [default: from the Solana CLI config]"),
        )
        .arg(
            Arg::with_name("config_file")
                .long("config")
                .value_name("PATH")
                .takes_value(true)
                .global(true)
                .help("Solana CLI config file"),
        )
        .arg(
            Arg::with_name("program_ids")
                .long("program_ids")
                .value_name("PROGRAM_IDS")
                .takes_value(true)
                .global(true)
                .help("JSON file of program ids, e.g. {\"auction\": \"<pubkey>\"}"),
        )
        .subcommand(
            SubCommand::with_name("create")
                .about("Create an auction over a vault, with you as authority")
                .arg(
                    Arg::with_name("vault")
                        .long("vault")
                        .value_name("VAULT")
                        .required(true)
                        .validator(is_valid_pubkey)
                        .takes_value(true)
                        .help("Pubkey of the vault being auctioned."),
                )
                .arg(
                    Arg::with_name("settings_file")
                        .long("settings_file")
                        .value_name("SETTINGS_FILE")
                        .takes_value(true)
                        .required(true)
                        .help("File path to auction settings (json). See settings_sample.json and the JSON structs in settings_utils.rs."),
                )
                .arg(
                    Arg::with_name("dry_run")
                        .long("dry_run")
                        .takes_value(false)
                        .help("Print the instructions instead of sending them."),
                ),
        )
        .subcommand(
            SubCommand::with_name("derive")
                .about("Print the auction addresses for a vault")
                .arg(
                    Arg::with_name("vault")
                        .long("vault")
                        .value_name("VAULT")
                        .required(true)
                        .validator(is_valid_pubkey)
                        .takes_value(true)
                        .help("Pubkey of the vault being auctioned."),
                ),
        )
        .subcommand(
            SubCommand::with_name("label")
                .about("Render a SOL amount with its USD value")
                .arg(
                    Arg::with_name("amount")
                        .long("amount")
                        .value_name("AMOUNT")
                        .required(true)
                        .takes_value(true)
                        .help("Amount of SOL. Non-numeric input renders the bid placeholder."),
                )
                .arg(
                    Arg::with_name("sol_price")
                        .long("sol_price")
                        .value_name("USD")
                        .validator(is_parsable::<f64>)
                        .takes_value(true)
                        .help("SOL price in USD [default: 0]"),
                )
                .arg(
                    Arg::with_name("title")
                        .long("title")
                        .value_name("TITLE")
                        .takes_value(true)
                        .help("Title shown before the amount."),
                )
                .arg(
                    Arg::with_name("no_usd")
                        .long("no_usd")
                        .takes_value(false)
                        .help("Hide the USD value."),
                ),
        )
        .get_matches();

    let result = match app_matches.subcommand() {
        ("create", Some(sub_matches)) => create(&app_matches, sub_matches),
        ("derive", Some(sub_matches)) => derive_addresses(&app_matches, sub_matches),
        ("label", Some(sub_matches)) => label(sub_matches),
        _ => unreachable!(),
    };

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}

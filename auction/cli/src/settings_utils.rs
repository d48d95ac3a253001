use {
    crate::{error::ClientError, make_auction::PartialCreateAuctionArgsV2},
    serde::{Deserialize, Serialize},
    solana_program::{hash::Hash, pubkey::Pubkey},
    spl_auction::processor::{AuctionName, PriceFloor, WinnerLimit},
    std::{convert::TryInto, fs::File, io::Read, str::FromStr},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JSONPriceFloor {
    None,
    Minimum { price: u64 },
    Blinded { hash: String },
}

/// Auction settings file. See settings_sample.json.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JSONAuctionSettings {
    /// 0 means unlimited winners.
    pub winner_limit: u64,
    pub end_auction_at: Option<i64>,
    pub end_auction_gap: Option<i64>,
    pub token_mint: String,
    pub price_floor: Option<JSONPriceFloor>,
    pub tick_size: Option<u64>,
    pub gap_tick_size_percentage: Option<u8>,
    pub instant_sale_price: Option<u64>,
    /// At most 32 bytes of UTF-8.
    pub name: Option<String>,
    pub authority: Option<String>,
    pub resource: Option<String>,
}

fn parse_pubkey(field: &'static str, value: &str) -> Result<Pubkey, ClientError> {
    Pubkey::from_str(value).map_err(|err| ClientError::InvalidSetting {
        field,
        reason: err.to_string(),
    })
}

fn parse_name(name: &str) -> Result<AuctionName, ClientError> {
    let bytes = name.as_bytes();
    if bytes.len() > 32 {
        return Err(ClientError::InvalidSetting {
            field: "name",
            reason: format!("{} bytes, at most 32 allowed", bytes.len()),
        });
    }
    let mut padded = [0u8; 32];
    padded[..bytes.len()].copy_from_slice(bytes);
    Ok(Some(padded))
}

fn parse_price_floor(price_floor: &Option<JSONPriceFloor>) -> Result<PriceFloor, ClientError> {
    Ok(match price_floor {
        None | Some(JSONPriceFloor::None) => PriceFloor::None([0; 32]),
        Some(JSONPriceFloor::Minimum { price }) => PriceFloor::MinimumPrice([*price, 0, 0, 0]),
        Some(JSONPriceFloor::Blinded { hash }) => PriceFloor::BlindedPrice(
            Hash::from_str(hash).map_err(|err| ClientError::InvalidSetting {
                field: "price_floor",
                reason: err.to_string(),
            })?,
        ),
    })
}

impl JSONAuctionSettings {
    pub fn to_partial_args(&self) -> Result<PartialCreateAuctionArgsV2, ClientError> {
        let winners = match self.winner_limit {
            0 => WinnerLimit::Unlimited(0),
            val => WinnerLimit::Capped(val.try_into().map_err(|_| ClientError::InvalidSetting {
                field: "winner_limit",
                reason: format!("{} does not fit in usize", val),
            })?),
        };

        Ok(PartialCreateAuctionArgsV2 {
            winners,
            end_auction_at: self.end_auction_at,
            end_auction_gap: self.end_auction_gap,
            token_mint: parse_pubkey("token_mint", &self.token_mint)?,
            price_floor: parse_price_floor(&self.price_floor)?,
            tick_size: self.tick_size,
            gap_tick_size_percentage: self.gap_tick_size_percentage,
            instant_sale_price: self.instant_sale_price,
            name: match &self.name {
                Some(name) => parse_name(name)?,
                None => None,
            },
            authority: match &self.authority {
                Some(val) => Some(parse_pubkey("authority", val)?),
                None => None,
            },
            resource: match &self.resource {
                Some(val) => Some(parse_pubkey("resource", val)?),
                None => None,
            },
        })
    }
}

pub fn parse_settings_from_reader<R: Read>(
    reader: R,
) -> Result<(PartialCreateAuctionArgsV2, JSONAuctionSettings), ClientError> {
    let json_settings: JSONAuctionSettings = serde_json::from_reader(reader)?;
    let settings = json_settings.to_partial_args()?;
    Ok((settings, json_settings))
}

pub fn parse_settings(
    settings_file: &str,
) -> Result<(PartialCreateAuctionArgsV2, JSONAuctionSettings), ClientError> {
    let file = File::open(settings_file).map_err(|source| ClientError::Io {
        path: settings_file.to_owned(),
        source,
    })?;
    parse_settings_from_reader(file)
}

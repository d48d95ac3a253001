use {
    crate::error::ClientError,
    log::debug,
    serde::{Deserialize, Serialize},
    solana_cli_config::{Config, CONFIG_FILE},
    solana_program::pubkey::Pubkey,
    std::{fs::File, io::Read, path::Path, str::FromStr},
};

/// Program identifiers the client targets. Passed explicitly to every builder instead of being
/// looked up from process-wide state.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgramIds {
    pub auction: Pubkey,
}

impl Default for ProgramIds {
    fn default() -> Self {
        ProgramIds {
            auction: spl_auction::id(),
        }
    }
}

/// On-disk form of [`ProgramIds`]; keys are base58 strings and missing entries keep their
/// defaults.
#[derive(Serialize, Deserialize, Default)]
pub struct JSONProgramIds {
    pub auction: Option<String>,
}

impl ProgramIds {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ClientError> {
        let json: JSONProgramIds = serde_json::from_reader(reader)?;
        let mut program_ids = ProgramIds::default();
        if let Some(auction) = json.auction {
            program_ids.auction =
                Pubkey::from_str(&auction).map_err(|err| ClientError::InvalidSetting {
                    field: "auction",
                    reason: err.to_string(),
                })?;
        }
        Ok(program_ids)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ClientError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let program_ids = Self::from_reader(file)?;
        debug!("Loaded program ids {:?} from {}", program_ids, path.display());
        Ok(program_ids)
    }
}

/// Loads the Solana CLI config, from `config_file` when given, otherwise from the default
/// location if it exists.
pub fn load_cli_config(config_file: Option<&str>) -> Result<Config, ClientError> {
    match config_file {
        Some(path) => Config::load(path).map_err(|source| ClientError::Io {
            path: path.to_owned(),
            source,
        }),
        None => match CONFIG_FILE.as_ref() {
            Some(path) if Path::new(path).exists() => {
                Config::load(path).map_err(|source| ClientError::Io {
                    path: path.to_owned(),
                    source,
                })
            }
            _ => Ok(Config::default()),
        },
    }
}

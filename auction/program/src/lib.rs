//! An Auction program for the Solana blockchain.

pub mod entrypoint;
pub mod errors;
pub mod instruction;
pub mod processor;
mod utils;
// Export current sdk types for downstream users building with a different sdk version
pub use solana_program;

use solana_program::pubkey::Pubkey;

/// Prefix used in PDA derivations to avoid collisions with other programs.
pub const PREFIX: &str = "auction";

/// Used in seeds to make the extended auction data pda address
pub const EXTENDED: &str = "extended";

solana_program::declare_id!("auctxRXPeJoc4817jDhf4HbjnhEcr1cCXenosMhK5R8");

/// Find the auction account for a resource, with seed ['auction', program_id, resource].
///
/// Returns `None` only when no bump seed produces an off-curve address.
pub fn find_auction_address(program_id: &Pubkey, resource: &Pubkey) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[PREFIX.as_bytes(), program_id.as_ref(), resource.as_ref()],
        program_id,
    )
}

/// Find the extended auction data account, with seed ['auction', program_id, resource, 'extended'].
pub fn find_auction_extended_address(
    program_id: &Pubkey,
    resource: &Pubkey,
) -> Option<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[
            PREFIX.as_bytes(),
            program_id.as_ref(),
            resource.as_ref(),
            EXTENDED.as_bytes(),
        ],
        program_id,
    )
}

use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod validation;

#[cfg(test)]
mod tests;

use instructions::*;
use state::ProfileMetadata;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// TipUp Program
///
/// A permanent tipping ledger for creators:
/// - Creator registration under a unique name, one name per wallet
/// - Profile metadata updates by the controlling wallet
/// - Tips in SOL with an attached message, resolved by name or by
///   wallet address, forwarded to the creator in the same transaction
/// - Append-only per-sender tip history and platform-wide counters
///
/// The program never holds tipped funds; lamports move straight from
/// tipper to creator. Recorded earnings and delivered funds therefore
/// cannot diverge: a failed transfer aborts the whole transaction,
/// counters included.
///
/// # Security Considerations
///
/// Both tipping instructions validate that the `creator` system
/// account matches the wallet stored in the resolved profile. This
/// prevents an attack where funds transfer to one wallet while a
/// different creator's profile records the earnings.
///
/// See `tip.rs` and `tip_by_address.rs` for the constraint
/// implementation.
#[program]
pub mod tipup {
    use super::*;

    /// One-time platform bootstrap
    ///
    /// Creates the global stats account. Permissionless; grants the
    /// caller nothing.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    /// Register the calling wallet as a creator under `name`
    ///
    /// Fails if the name is empty or over-length, if the name is
    /// already taken, or if the wallet already controls a name.
    pub fn register_creator(
        ctx: Context<RegisterCreator>,
        name: String,
        metadata: ProfileMetadata,
    ) -> Result<()> {
        instructions::register_creator::register_creator(ctx, name, metadata)
    }

    /// Overwrite the mutable metadata of the caller's profile
    ///
    /// Only the controlling wallet can update; name, wallet, counters
    /// and registration time are immutable.
    pub fn update_profile(ctx: Context<UpdateProfile>, metadata: ProfileMetadata) -> Result<()> {
        instructions::update_profile::update_profile(ctx, metadata)
    }

    /// Tip a creator by name with an attached message
    ///
    /// Transfers `amount` lamports from the caller to the creator's
    /// wallet and records the tip permanently.
    ///
    /// # Security
    /// Validates that `creator` matches the registered wallet of the
    /// named profile.
    pub fn tip(ctx: Context<Tip>, name: String, message: String, amount: u64) -> Result<()> {
        instructions::tip::tip(ctx, name, message, amount)
    }

    /// Tip a creator by wallet address with an attached message
    ///
    /// Resolves through the wallet-to-name index to the same profile
    /// that tipping by name would credit.
    pub fn tip_by_address(
        ctx: Context<TipByAddress>,
        message: String,
        amount: u64,
    ) -> Result<()> {
        instructions::tip_by_address::tip_by_address(ctx, message, amount)
    }
}

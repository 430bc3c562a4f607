use anchor_lang::prelude::*;

use crate::error::TipUpError;
use crate::state::{CreatorHandle, CreatorProfile, ProfileMetadata};
use crate::validation::validate_metadata;

/// Overwrites the mutable metadata of the caller's profile
///
/// The caller is resolved through their wallet-keyed handle, so a
/// wallet that never registered has no handle account and the call
/// fails before the handler runs. Name, wallet, counters and the
/// registration time cannot be changed through this path.
pub fn update_profile(ctx: Context<UpdateProfile>, metadata: ProfileMetadata) -> Result<()> {
    validate_metadata(&metadata)?;

    let profile = &mut ctx.accounts.creator_profile;
    profile.set_metadata(metadata);

    emit!(CreatorProfileUpdated {
        name: profile.name.clone(),
        display_name: profile.display_name.clone(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateProfile<'info> {
    /// The controlling wallet
    pub authority: Signer<'info>,

    /// The caller's wallet-to-name index entry
    #[account(
        seeds = [CreatorHandle::SEED_PREFIX, authority.key().as_ref()],
        bump = creator_handle.bump,
    )]
    pub creator_handle: Account<'info, CreatorHandle>,

    /// The profile being updated, resolved through the handle
    #[account(
        mut,
        seeds = [CreatorProfile::SEED_PREFIX, creator_handle.name.as_bytes()],
        bump = creator_profile.bump,
        constraint = creator_profile.wallet == authority.key() @ TipUpError::Unauthorized,
    )]
    pub creator_profile: Account<'info, CreatorProfile>,
}

#[event]
pub struct CreatorProfileUpdated {
    pub name: String,
    pub display_name: String,
    pub timestamp: i64,
}

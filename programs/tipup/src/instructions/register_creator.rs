use anchor_lang::prelude::*;

use crate::state::{CreatorHandle, CreatorProfile, GlobalStats, ProfileMetadata};
use crate::validation::{validate_metadata, validate_name};

/// Registers a creator under a unique name
///
/// Creates the name-keyed profile and the wallet-keyed handle in one
/// transaction. Both are `init` PDAs, so the two uniqueness rules fall
/// out of account creation: a taken name fails on the profile, a
/// wallet that already controls a name fails on the handle. Neither
/// failure leaves any state behind.
pub fn register_creator(
    ctx: Context<RegisterCreator>,
    name: String,
    metadata: ProfileMetadata,
) -> Result<()> {
    validate_name(&name)?;
    validate_metadata(&metadata)?;

    let clock = Clock::get()?;

    let profile = &mut ctx.accounts.creator_profile;
    profile.wallet = ctx.accounts.creator.key();
    profile.name = name.clone();
    profile.set_metadata(metadata);
    profile.total_tipped = 0;
    profile.tip_count = 0;
    profile.registration_time = clock.unix_timestamp;
    profile.bump = ctx.bumps.creator_profile;

    let handle = &mut ctx.accounts.creator_handle;
    handle.wallet = ctx.accounts.creator.key();
    handle.name = name.clone();
    handle.bump = ctx.bumps.creator_handle;

    ctx.accounts.global_stats.record_registration()?;

    emit!(CreatorRegistered {
        name,
        wallet: ctx.accounts.creator.key(),
        display_name: profile.display_name.clone(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct RegisterCreator<'info> {
    /// The wallet registering as a creator
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The creator's profile, keyed by name
    #[account(
        init,
        payer = creator,
        space = 8 + CreatorProfile::INIT_SPACE,
        seeds = [CreatorProfile::SEED_PREFIX, name.as_bytes()],
        bump,
    )]
    pub creator_profile: Account<'info, CreatorProfile>,

    /// Wallet-to-name index entry
    /// Seeded by the wallet, so this `init` enforces one name per wallet
    #[account(
        init,
        payer = creator,
        space = 8 + CreatorHandle::INIT_SPACE,
        seeds = [CreatorHandle::SEED_PREFIX, creator.key().as_ref()],
        bump,
    )]
    pub creator_handle: Account<'info, CreatorHandle>,

    /// The platform-wide counters
    #[account(
        mut,
        seeds = [GlobalStats::SEED_PREFIX],
        bump = global_stats.bump,
    )]
    pub global_stats: Account<'info, GlobalStats>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct CreatorRegistered {
    pub name: String,
    pub wallet: Pubkey,
    pub display_name: String,
    pub timestamp: i64,
}

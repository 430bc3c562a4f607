use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::TipUpError;
use crate::instructions::tip::TipSent;
use crate::state::{CreatorHandle, CreatorProfile, GlobalStats, TipRecord, TipperLog};
use crate::validation::validate_tip;

/// Tips a creator, resolved by wallet address
///
/// Same contract as [`tip`](crate::instructions::tip::tip): the
/// creator's wallet-keyed handle leads to the one name-keyed profile,
/// so both entry points credit the same record.
///
/// # Security
/// The handle is derived from the `creator` account and the profile
/// from the handle's name, and `creator_profile.wallet` must round-trip
/// back to `creator`. Funds and credited earnings cannot diverge.
pub fn tip_by_address(ctx: Context<TipByAddress>, message: String, amount: u64) -> Result<()> {
    validate_tip(amount, &message)?;

    let clock = Clock::get()?;

    // Transfer SOL from tipper to creator
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.tipper.to_account_info(),
                to: ctx.accounts.creator.to_account_info(),
            },
        ),
        amount,
    )?;

    let profile = &mut ctx.accounts.creator_profile;
    profile.record_tip(amount)?;

    // First tip from this wallet creates the log
    let log = &mut ctx.accounts.tipper_log;
    if log.tipper == Pubkey::default() {
        log.tipper = ctx.accounts.tipper.key();
        log.bump = ctx.bumps.tipper_log;
    }

    let record = &mut ctx.accounts.tip_record;
    record.from = ctx.accounts.tipper.key();
    record.to = ctx.accounts.creator.key();
    record.amount = amount;
    record.message = message.clone();
    record.timestamp = clock.unix_timestamp;
    record.index = log.sent_count;
    record.bump = ctx.bumps.tip_record;

    log.advance()?;
    ctx.accounts.global_stats.record_tip()?;

    emit!(TipSent {
        name: ctx.accounts.creator_profile.name.clone(),
        from: ctx.accounts.tipper.key(),
        to: ctx.accounts.creator.key(),
        amount,
        message,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TipByAddress<'info> {
    /// The wallet sending the tip
    #[account(mut)]
    pub tipper: Signer<'info>,

    /// The creator receiving the tip
    #[account(mut)]
    pub creator: SystemAccount<'info>,

    /// The creator's wallet-to-name index entry
    /// Absent for an unregistered wallet, which fails the call untouched
    #[account(
        seeds = [CreatorHandle::SEED_PREFIX, creator.key().as_ref()],
        bump = creator_handle.bump,
    )]
    pub creator_handle: Account<'info, CreatorHandle>,

    /// The same profile that tipping by name would resolve
    /// SECURITY: the wallet stored in the profile must match `creator`
    #[account(
        mut,
        seeds = [CreatorProfile::SEED_PREFIX, creator_handle.name.as_bytes()],
        bump = creator_profile.bump,
        constraint = creator_profile.wallet == creator.key() @ TipUpError::InvalidCreatorAccount,
    )]
    pub creator_profile: Account<'info, CreatorProfile>,

    /// The sender's history head, created on their first tip
    #[account(
        init_if_needed,
        payer = tipper,
        space = 8 + TipperLog::INIT_SPACE,
        seeds = [TipperLog::SEED_PREFIX, tipper.key().as_ref()],
        bump,
    )]
    pub tipper_log: Account<'info, TipperLog>,

    /// Permanent record of this tip, at the sender's next index
    #[account(
        init,
        payer = tipper,
        space = 8 + TipRecord::INIT_SPACE,
        seeds = [
            TipRecord::SEED_PREFIX,
            tipper.key().as_ref(),
            &tipper_log.sent_count.to_le_bytes(),
        ],
        bump,
    )]
    pub tip_record: Account<'info, TipRecord>,

    /// The platform-wide counters
    #[account(
        mut,
        seeds = [GlobalStats::SEED_PREFIX],
        bump = global_stats.bump,
    )]
    pub global_stats: Account<'info, GlobalStats>,

    pub system_program: Program<'info, System>,
}

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::TipUpError;
use crate::state::{CreatorProfile, GlobalStats, TipRecord, TipperLog};
use crate::validation::validate_tip;

/// Tips a creator, resolved by name
///
/// Transfers the lamports straight from tipper to creator, credits the
/// profile counters, and appends a permanent record to the sender's
/// history. All of it happens in one transaction: if the transfer
/// fails, nothing is recorded.
///
/// # Security
/// The `creator` account MUST match `creator_profile.wallet`. Without
/// this constraint an attacker could pass their own wallet as the
/// recipient while the profile of a legitimate creator gets credited,
/// leaving the recorded earnings out of step with the funds that moved.
pub fn tip(ctx: Context<Tip>, name: String, message: String, amount: u64) -> Result<()> {
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
        name,
        from: ctx.accounts.tipper.key(),
        to: ctx.accounts.creator.key(),
        amount,
        message,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct Tip<'info> {
    /// The wallet sending the tip
    #[account(mut)]
    pub tipper: Signer<'info>,

    /// The creator receiving the tip
    /// SECURITY: MUST be validated against creator_profile.wallet so
    /// funds cannot be routed to a wallet other than the registered one
    #[account(
        mut,
        address = creator_profile.wallet @ TipUpError::InvalidCreatorAccount,
    )]
    pub creator: SystemAccount<'info>,

    /// The creator's profile, keyed by name
    /// Absent for an unregistered name, which fails the call untouched
    #[account(
        mut,
        seeds = [CreatorProfile::SEED_PREFIX, name.as_bytes()],
        bump = creator_profile.bump,
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

#[event]
pub struct TipSent {
    pub name: String,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub message: String,
    pub timestamp: i64,
}

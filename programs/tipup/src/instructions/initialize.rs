use anchor_lang::prelude::*;

use crate::state::GlobalStats;

/// Creates the platform-wide stats account
///
/// Permissionless one-time bootstrap: the stats PDA can only be
/// created once, and the program grants its creator no authority.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let stats = &mut ctx.accounts.global_stats;
    stats.total_tips = 0;
    stats.total_creators = 0;
    stats.bump = ctx.bumps.global_stats;

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Whoever pays for the stats account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The platform-wide counters
    #[account(
        init,
        payer = payer,
        space = 8 + GlobalStats::INIT_SPACE,
        seeds = [GlobalStats::SEED_PREFIX],
        bump,
    )]
    pub global_stats: Account<'info, GlobalStats>,

    pub system_program: Program<'info, System>,
}

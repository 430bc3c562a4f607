use anchor_lang::prelude::*;

use crate::error::TipUpError;

/// Maximum length of a creator name in bytes.
///
/// The name doubles as a PDA seed, and a single seed is capped at 32
/// bytes by the runtime.
pub const MAX_NAME_LEN: usize = 32;
/// Maximum length of a creator display name in bytes
pub const MAX_DISPLAY_NAME_LEN: usize = 64;
/// Maximum length of a creator profile message in bytes
pub const MAX_PROFILE_MESSAGE_LEN: usize = 256;
/// Maximum length of the avatar and website URLs in bytes
pub const MAX_URL_LEN: usize = 256;
/// Maximum length of a social handle in bytes
pub const MAX_SOCIAL_HANDLE_LEN: usize = 64;
/// Maximum length of a tip message in bytes
pub const MAX_TIP_MESSAGE_LEN: usize = 280;

/// The mutable portion of a creator profile
///
/// Grouped so that registration and profile updates share one argument
/// type and one validation path. Everything outside this struct
/// (wallet, name, counters, registration time) is write-once or
/// tip-driven and cannot be touched by an update.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct ProfileMetadata {
    pub display_name: String,
    pub profile_message: String,
    pub avatar_url: String,
    pub website_url: String,
    pub twitter_handle: String,
    pub instagram_handle: String,
    pub youtube_handle: String,
    pub discord_handle: String,
}

/// A registered creator, keyed by their chosen name
///
/// This is the single owned record for a creator. The wallet-keyed
/// [`CreatorHandle`] is a pointer into it, never a copy.
#[account]
#[derive(InitSpace)]
pub struct CreatorProfile {
    /// The controlling wallet - set at registration, immutable
    pub wallet: Pubkey,
    /// The unique name key - set at registration, immutable
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// Display name shown on the profile page
    #[max_len(MAX_DISPLAY_NAME_LEN)]
    pub display_name: String,
    /// Free-form message shown to supporters
    #[max_len(MAX_PROFILE_MESSAGE_LEN)]
    pub profile_message: String,
    /// Avatar image URL
    #[max_len(MAX_URL_LEN)]
    pub avatar_url: String,
    /// Website URL
    #[max_len(MAX_URL_LEN)]
    pub website_url: String,
    /// Twitter handle
    #[max_len(MAX_SOCIAL_HANDLE_LEN)]
    pub twitter_handle: String,
    /// Instagram handle
    #[max_len(MAX_SOCIAL_HANDLE_LEN)]
    pub instagram_handle: String,
    /// YouTube handle
    #[max_len(MAX_SOCIAL_HANDLE_LEN)]
    pub youtube_handle: String,
    /// Discord handle
    #[max_len(MAX_SOCIAL_HANDLE_LEN)]
    pub discord_handle: String,
    /// Lifetime lamports received through tips
    pub total_tipped: u64,
    /// Number of tips received
    pub tip_count: u64,
    /// Timestamp of registration - set once, immutable
    pub registration_time: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// Wallet-to-name index entry
///
/// Seeded by the controlling wallet, so its `init` at registration is
/// what enforces one name per wallet: a second registration from the
/// same wallet fails to create this account.
#[account]
#[derive(InitSpace)]
pub struct CreatorHandle {
    /// The controlling wallet
    pub wallet: Pubkey,
    /// The name this wallet registered
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// PDA bump seed
    pub bump: u8,
}

/// Per-sender tip history head
///
/// Tracks how many tips a wallet has sent. Each [`TipRecord`] is
/// seeded by this counter at send time, so a sender's history is
/// enumerable in insertion order without scanning.
#[account]
#[derive(InitSpace)]
pub struct TipperLog {
    /// The wallet whose sent tips this log counts
    pub tipper: Pubkey,
    /// Number of tips sent by this wallet
    pub sent_count: u64,
    /// PDA bump seed
    pub bump: u8,
}

/// Record of one tip, append-only
///
/// No instruction mutates or closes this account once written. Its
/// existence implies the lamports moved to `to` in the same
/// transaction that created it.
#[account]
#[derive(InitSpace)]
pub struct TipRecord {
    /// Wallet that sent the tip
    pub from: Pubkey,
    /// Wallet that received the tip (the creator)
    pub to: Pubkey,
    /// Amount tipped in lamports
    pub amount: u64,
    /// Message attached by the tipper
    #[max_len(MAX_TIP_MESSAGE_LEN)]
    pub message: String,
    /// Timestamp of the tip
    pub timestamp: i64,
    /// Position in the sender's history, starting at 0
    pub index: u64,
    /// PDA bump seed
    pub bump: u8,
}

/// Platform-wide counters, singleton
#[account]
#[derive(InitSpace)]
pub struct GlobalStats {
    /// Tips sent across all creators
    pub total_tips: u64,
    /// Registered creators
    pub total_creators: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl CreatorProfile {
    pub const SEED_PREFIX: &'static [u8] = b"creator";

    /// Overwrites the mutable metadata fields, leaving wallet, name,
    /// counters and registration time untouched
    pub fn set_metadata(&mut self, metadata: ProfileMetadata) {
        self.display_name = metadata.display_name;
        self.profile_message = metadata.profile_message;
        self.avatar_url = metadata.avatar_url;
        self.website_url = metadata.website_url;
        self.twitter_handle = metadata.twitter_handle;
        self.instagram_handle = metadata.instagram_handle;
        self.youtube_handle = metadata.youtube_handle;
        self.discord_handle = metadata.discord_handle;
    }

    /// Credits a received tip to the profile counters
    ///
    /// Both counters move together, exactly once per tip.
    pub fn record_tip(&mut self, amount: u64) -> Result<()> {
        self.total_tipped = self
            .total_tipped
            .checked_add(amount)
            .ok_or(TipUpError::ArithmeticOverflow)?;
        self.tip_count = self
            .tip_count
            .checked_add(1)
            .ok_or(TipUpError::ArithmeticOverflow)?;
        Ok(())
    }
}

impl CreatorHandle {
    pub const SEED_PREFIX: &'static [u8] = b"handle";
}

impl TipperLog {
    pub const SEED_PREFIX: &'static [u8] = b"tipper";

    /// Advances the sent counter after a tip record is written
    pub fn advance(&mut self) -> Result<()> {
        self.sent_count = self
            .sent_count
            .checked_add(1)
            .ok_or(TipUpError::ArithmeticOverflow)?;
        Ok(())
    }
}

impl TipRecord {
    pub const SEED_PREFIX: &'static [u8] = b"tip";
}

impl GlobalStats {
    pub const SEED_PREFIX: &'static [u8] = b"stats";

    pub fn record_registration(&mut self) -> Result<()> {
        self.total_creators = self
            .total_creators
            .checked_add(1)
            .ok_or(TipUpError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_tip(&mut self) -> Result<()> {
        self.total_tips = self
            .total_tips
            .checked_add(1)
            .ok_or(TipUpError::ArithmeticOverflow)?;
        Ok(())
    }
}

use anchor_lang::prelude::*;

use crate::error::TipUpError;
use crate::state::*;
use crate::validation::*;

fn metadata(display_name: &str) -> ProfileMetadata {
    ProfileMetadata {
        display_name: display_name.to_string(),
        profile_message: "I create amazing content!".to_string(),
        avatar_url: "https://example.com/avatar.png".to_string(),
        website_url: "https://example.com".to_string(),
        twitter_handle: "alice".to_string(),
        instagram_handle: String::new(),
        youtube_handle: String::new(),
        discord_handle: String::new(),
    }
}

fn registered_profile(name: &str, wallet: Pubkey) -> CreatorProfile {
    let mut profile = CreatorProfile {
        wallet,
        name: name.to_string(),
        display_name: String::new(),
        profile_message: String::new(),
        avatar_url: String::new(),
        website_url: String::new(),
        twitter_handle: String::new(),
        instagram_handle: String::new(),
        youtube_handle: String::new(),
        discord_handle: String::new(),
        total_tipped: 0,
        tip_count: 0,
        registration_time: 1_700_000_000,
        bump: 255,
    };
    profile.set_metadata(metadata("Alice"));
    profile
}

#[test]
fn name_bounds() {
    assert!(validate_name("alice").is_ok());
    assert!(validate_name(&"a".repeat(MAX_NAME_LEN)).is_ok());

    assert_eq!(
        validate_name("").unwrap_err(),
        TipUpError::NameEmpty.into()
    );
    assert_eq!(
        validate_name(&"a".repeat(MAX_NAME_LEN + 1)).unwrap_err(),
        TipUpError::NameTooLong.into()
    );
}

#[test]
fn metadata_bounds() {
    assert!(validate_metadata(&metadata("Alice")).is_ok());
    assert!(validate_metadata(&ProfileMetadata::default()).is_ok());

    let mut oversized = metadata("Alice");
    oversized.display_name = "d".repeat(MAX_DISPLAY_NAME_LEN + 1);
    assert_eq!(
        validate_metadata(&oversized).unwrap_err(),
        TipUpError::MetadataTooLong.into()
    );

    let mut oversized = metadata("Alice");
    oversized.avatar_url = "u".repeat(MAX_URL_LEN + 1);
    assert!(validate_metadata(&oversized).is_err());

    let mut oversized = metadata("Alice");
    oversized.discord_handle = "h".repeat(MAX_SOCIAL_HANDLE_LEN + 1);
    assert!(validate_metadata(&oversized).is_err());
}

#[test]
fn tip_bounds() {
    assert!(validate_tip(1, "gg").is_ok());
    assert!(validate_tip(u64::MAX, &"m".repeat(MAX_TIP_MESSAGE_LEN)).is_ok());

    assert_eq!(
        validate_tip(0, "gg").unwrap_err(),
        TipUpError::InvalidTipAmount.into()
    );
    assert_eq!(
        validate_tip(1, &"m".repeat(MAX_TIP_MESSAGE_LEN + 1)).unwrap_err(),
        TipUpError::MessageTooLong.into()
    );
}

#[test]
fn tips_move_both_counters_together() {
    let mut profile = registered_profile("alice", Pubkey::new_unique());

    profile.record_tip(100).unwrap();
    assert_eq!(profile.total_tipped, 100);
    assert_eq!(profile.tip_count, 1);

    profile.record_tip(250).unwrap();
    assert_eq!(profile.total_tipped, 350);
    assert_eq!(profile.tip_count, 2);
}

#[test]
fn tip_counter_overflow_is_rejected() {
    let mut profile = registered_profile("alice", Pubkey::new_unique());
    profile.total_tipped = u64::MAX;

    assert_eq!(
        profile.record_tip(1).unwrap_err(),
        TipUpError::ArithmeticOverflow.into()
    );
}

#[test]
fn profile_update_leaves_identity_untouched() {
    let wallet = Pubkey::new_unique();
    let mut profile = registered_profile("alice", wallet);
    profile.record_tip(100).unwrap();

    profile.set_metadata(ProfileMetadata {
        display_name: "Alice B".to_string(),
        profile_message: "New message".to_string(),
        avatar_url: String::new(),
        website_url: String::new(),
        twitter_handle: "alice_b".to_string(),
        instagram_handle: "alice.b".to_string(),
        youtube_handle: String::new(),
        discord_handle: String::new(),
    });

    // Mutable fields changed
    assert_eq!(profile.display_name, "Alice B");
    assert_eq!(profile.profile_message, "New message");
    assert_eq!(profile.avatar_url, "");
    assert_eq!(profile.instagram_handle, "alice.b");

    // Write-once and tip-driven fields did not
    assert_eq!(profile.wallet, wallet);
    assert_eq!(profile.name, "alice");
    assert_eq!(profile.total_tipped, 100);
    assert_eq!(profile.tip_count, 1);
    assert_eq!(profile.registration_time, 1_700_000_000);
}

#[test]
fn tipper_log_indices_are_sequential() {
    let mut log = TipperLog {
        tipper: Pubkey::new_unique(),
        sent_count: 0,
        bump: 255,
    };

    for expected in 0..5u64 {
        assert_eq!(log.sent_count, expected);
        log.advance().unwrap();
    }
    assert_eq!(log.sent_count, 5);
}

#[test]
fn global_stats_counters() {
    let mut stats = GlobalStats {
        total_tips: 0,
        total_creators: 0,
        bump: 255,
    };

    stats.record_registration().unwrap();
    stats.record_tip().unwrap();
    stats.record_tip().unwrap();

    assert_eq!(stats.total_creators, 1);
    assert_eq!(stats.total_tips, 2);

    stats.total_tips = u64::MAX;
    assert!(stats.record_tip().is_err());
}

#[test]
fn account_sizes() {
    assert_eq!(8 + CreatorProfile::INIT_SPACE, 1221);
    assert_eq!(8 + CreatorHandle::INIT_SPACE, 77);
    assert_eq!(8 + TipperLog::INIT_SPACE, 49);
    assert_eq!(8 + TipRecord::INIT_SPACE, 381);
    assert_eq!(8 + GlobalStats::INIT_SPACE, 25);
}

#[test]
fn handle_pda_is_wallet_keyed() {
    // One handle PDA per wallet no matter which name is attempted -
    // the second registration from a wallet collides here
    let wallet = Pubkey::new_unique();
    let (for_alice, _) = Pubkey::find_program_address(
        &[CreatorHandle::SEED_PREFIX, wallet.as_ref()],
        &crate::ID,
    );
    let (for_bob, _) = Pubkey::find_program_address(
        &[CreatorHandle::SEED_PREFIX, wallet.as_ref()],
        &crate::ID,
    );
    assert_eq!(for_alice, for_bob);

    let other = Pubkey::new_unique();
    let (for_other, _) = Pubkey::find_program_address(
        &[CreatorHandle::SEED_PREFIX, other.as_ref()],
        &crate::ID,
    );
    assert_ne!(for_alice, for_other);
}

#[test]
fn profile_pda_is_name_keyed() {
    let (alice, _) = Pubkey::find_program_address(
        &[CreatorProfile::SEED_PREFIX, b"alice"],
        &crate::ID,
    );
    let (alice_again, _) = Pubkey::find_program_address(
        &[CreatorProfile::SEED_PREFIX, b"alice"],
        &crate::ID,
    );
    let (bob, _) = Pubkey::find_program_address(
        &[CreatorProfile::SEED_PREFIX, b"bob"],
        &crate::ID,
    );

    assert_eq!(alice, alice_again);
    assert_ne!(alice, bob);
}

#[test]
fn tip_record_pdas_enumerate_a_history() {
    let tipper = Pubkey::new_unique();
    let mut seen = std::collections::HashSet::new();

    // Records 0..N are derivable from the log counter alone, in order
    for index in 0..4u64 {
        let (record, _) = Pubkey::find_program_address(
            &[
                TipRecord::SEED_PREFIX,
                tipper.as_ref(),
                &index.to_le_bytes(),
            ],
            &crate::ID,
        );
        assert!(seen.insert(record));
    }
}

#[test]
fn alice_scenario() {
    // register alice with wallet A, tip 100 from wallet B
    let wallet_a = Pubkey::new_unique();
    let wallet_b = Pubkey::new_unique();

    assert!(validate_name("alice").is_ok());
    let mut alice = registered_profile("alice", wallet_a);
    let mut stats = GlobalStats {
        total_tips: 0,
        total_creators: 1,
        bump: 255,
    };

    validate_tip(100, "gg").unwrap();
    alice.record_tip(100).unwrap();
    stats.record_tip().unwrap();

    let record = TipRecord {
        from: wallet_b,
        to: alice.wallet,
        amount: 100,
        message: "gg".to_string(),
        timestamp: 1_700_000_100,
        index: 0,
        bump: 255,
    };

    assert_eq!(alice.total_tipped, 100);
    assert_eq!(alice.tip_count, 1);
    assert_eq!(record.to, wallet_a);
    assert_eq!(stats.total_tips, 1);

    // a zero-amount tip is rejected before any counter moves
    assert!(validate_tip(0, "hi").is_err());
    assert_eq!(alice.tip_count, 1);
}

use anchor_lang::prelude::*;

use crate::error::TipUpError;
use crate::state::{
    ProfileMetadata, MAX_DISPLAY_NAME_LEN, MAX_NAME_LEN, MAX_PROFILE_MESSAGE_LEN,
    MAX_SOCIAL_HANDLE_LEN, MAX_TIP_MESSAGE_LEN, MAX_URL_LEN,
};

pub fn validate_name(name: &str) -> Result<()> {
    require!(!name.is_empty(), TipUpError::NameEmpty);
    require!(name.len() <= MAX_NAME_LEN, TipUpError::NameTooLong);
    Ok(())
}

pub fn validate_metadata(metadata: &ProfileMetadata) -> Result<()> {
    require!(
        metadata.display_name.len() <= MAX_DISPLAY_NAME_LEN,
        TipUpError::MetadataTooLong
    );
    require!(
        metadata.profile_message.len() <= MAX_PROFILE_MESSAGE_LEN,
        TipUpError::MetadataTooLong
    );
    require!(
        metadata.avatar_url.len() <= MAX_URL_LEN,
        TipUpError::MetadataTooLong
    );
    require!(
        metadata.website_url.len() <= MAX_URL_LEN,
        TipUpError::MetadataTooLong
    );

    let handles = [
        &metadata.twitter_handle,
        &metadata.instagram_handle,
        &metadata.youtube_handle,
        &metadata.discord_handle,
    ];
    for handle in handles {
        require!(
            handle.len() <= MAX_SOCIAL_HANDLE_LEN,
            TipUpError::MetadataTooLong
        );
    }

    Ok(())
}

pub fn validate_tip(amount: u64, message: &str) -> Result<()> {
    require!(amount > 0, TipUpError::InvalidTipAmount);
    require!(
        message.len() <= MAX_TIP_MESSAGE_LEN,
        TipUpError::MessageTooLong
    );
    Ok(())
}

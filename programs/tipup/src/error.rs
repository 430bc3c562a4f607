use anchor_lang::prelude::*;

#[error_code]
pub enum TipUpError {
    #[msg("Name cannot be empty")]
    NameEmpty,

    #[msg("Name exceeds the maximum length")]
    NameTooLong,

    #[msg("Profile field exceeds the maximum length")]
    MetadataTooLong,

    #[msg("Tip message exceeds the maximum length")]
    MessageTooLong,

    #[msg("Tip amount must be greater than zero")]
    InvalidTipAmount,

    #[msg("Unauthorized - you do not control this profile")]
    Unauthorized,

    #[msg("Invalid creator account - does not match the registered wallet")]
    InvalidCreatorAccount,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

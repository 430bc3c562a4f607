pub mod initialize;
pub mod register_creator;
pub mod tip;
pub mod tip_by_address;
pub mod update_profile;

pub use initialize::*;
pub use register_creator::*;
pub use tip::*;
pub use tip_by_address::*;
pub use update_profile::*;

pub mod stake_account;

pub use stake_account::*;

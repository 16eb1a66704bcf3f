pub mod math;
pub mod transfer;

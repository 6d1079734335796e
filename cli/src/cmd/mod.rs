pub mod abis;
pub mod addresses;
pub mod target;

pub use abis::Abis;
pub use addresses::Addresses;

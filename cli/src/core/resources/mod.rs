pub mod artifacts;
pub mod manifest;
pub mod store;

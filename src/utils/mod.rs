/// Environment variable helpers used by the configuration layer
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Time-based one-time password generation for two-factor login
pub mod totp;

pub use logger::*;
pub use totp::*;

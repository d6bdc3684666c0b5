/// Session handling: login, client details, logout
pub mod auth;
/// High level client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;

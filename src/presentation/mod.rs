/// Text and table rendering of account overviews
pub mod account;
/// Order enums: action, type and duration
pub mod order;
/// Serde helpers for the API's loosely typed fields
pub mod serialization;

/// Account related operations
pub mod account;
/// Order placement operations
pub mod order;

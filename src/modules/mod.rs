// Declare all modules
pub mod config;
pub mod email;
pub mod encryption;
pub mod errors;
pub mod flows;
pub mod gate;
pub mod otp;
pub mod policy;
pub mod store;
pub mod tokens;
pub mod utils;

// No re-exports here as they're handled in lib.rs

pub mod config;
pub mod fields;
pub mod logging;
pub mod requests;
pub mod responses;
pub mod security;
pub mod token_decoding;

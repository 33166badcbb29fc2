pub mod admin;
pub mod me;
pub mod user;

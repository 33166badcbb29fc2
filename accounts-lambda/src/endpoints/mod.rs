pub mod auth;
pub mod profile;
pub mod status;
pub mod users;

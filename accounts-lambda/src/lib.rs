pub mod router;
pub mod state;
pub mod endpoints;

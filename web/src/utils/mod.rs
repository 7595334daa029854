pub mod auth;
pub mod format;

pub mod auth;
pub mod cache;
pub mod device;
pub mod health;
pub mod meta;
pub mod user;
pub mod validation;

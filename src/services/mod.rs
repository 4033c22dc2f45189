pub mod auth;
pub mod device;
pub mod meta;
pub mod user;

pub mod auth;
pub mod call_context;

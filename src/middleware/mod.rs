pub mod auth;
pub mod cors;
pub mod guard;
pub mod json;
pub mod rate_limit;

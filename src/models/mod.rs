pub mod application;
pub mod candidate;
pub mod interview;
pub mod job;
pub mod role;
pub mod scorecard;
pub mod staff;
pub mod user;

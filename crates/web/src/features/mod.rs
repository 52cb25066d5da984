pub mod auth;
pub mod ballots;
pub mod consensus;
pub mod teams;

pub mod auth;
pub mod ballot;
pub mod consensus;
pub mod stats;

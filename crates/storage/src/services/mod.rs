pub mod ballots;
pub mod scoring;

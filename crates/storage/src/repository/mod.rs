pub mod ballots;
pub mod teams;
pub mod users;

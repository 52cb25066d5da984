pub mod ballot_entry;
pub mod team;
pub mod user;

pub use ballot_entry::BallotEntry;
pub use team::Team;
pub use user::User;

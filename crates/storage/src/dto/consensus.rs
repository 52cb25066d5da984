use serde::Serialize;
use utoipa::ToSchema;

/// One row of a consensus ranking: total points a team earned across
/// every ballot in scope. Teams with no mentions are omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ConsensusEntry {
    pub team: String,
    pub points: i64,
}

/// A single team at a single rank inside one voter's ballot
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RankedTeam {
    pub team: String,
    pub rank: i32,
}

/// One voter's full ballot for a week, ranks ascending
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VoterBallot {
    pub username: String,
    pub rankings: Vec<RankedTeam>,
}

/// Every ballot cast for a week, one entry per voter, voters sorted by
/// username
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeekBallotsResponse {
    pub week: i32,
    pub total_voters: usize,
    pub ballots: Vec<VoterBallot>,
}

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Participation numbers for one week: distinct voters and the raw
/// ballot-entry count (not divided by ballot length)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct WeekVoteStats {
    pub week: i32,
    pub voters: i64,
    pub total_votes: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VoteStatisticsResponse {
    pub total_users: i64,
    pub weeks: Vec<WeekVoteStats>,
}

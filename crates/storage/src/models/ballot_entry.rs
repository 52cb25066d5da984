use sqlx::FromRow;
use uuid::Uuid;

/// One (user, week, team, rank) record. A user's ballot for a week is
/// the set of entries sharing (user_id, week), with ranks contiguous
/// from 1 and each team appearing at most once.
#[derive(Debug, Clone, FromRow)]
pub struct BallotEntry {
    pub entry_id: Uuid,
    pub user_id: Uuid,
    pub week: i32,
    pub team_id: Uuid,
    pub rank: i32,
}

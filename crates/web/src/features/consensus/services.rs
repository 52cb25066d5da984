use sqlx::PgPool;
use storage::dto::consensus::{ConsensusEntry, WeekBallotsResponse};
use storage::dto::stats::VoteStatisticsResponse;
use storage::error::Result;
use storage::repository::ballots::BallotRepository;
use storage::repository::users::UserRepository;
use storage::services::ballots::group_by_voter;
use storage::services::scoring::tally;

/// Consensus ranking for one week, recomputed from current entries on
/// every call
pub async fn week_consensus(pool: &PgPool, week: i32) -> Result<Vec<ConsensusEntry>> {
    let entries = BallotRepository::new(pool).week_entries(week).await?;

    Ok(tally(&entries))
}

/// Consensus ranking across every week combined
pub async fn overall_consensus(pool: &PgPool) -> Result<Vec<ConsensusEntry>> {
    let entries = BallotRepository::new(pool).all_entries().await?;

    Ok(tally(&entries))
}

/// Every ballot cast for a week, broken out per voter
pub async fn week_ballots(pool: &PgPool, week: i32) -> Result<WeekBallotsResponse> {
    let rows = BallotRepository::new(pool).week_entries_by_voter(week).await?;
    let ballots = group_by_voter(rows);

    Ok(WeekBallotsResponse {
        week,
        total_voters: ballots.len(),
        ballots,
    })
}

/// Registered-user count plus per-week voter and entry counts
pub async fn vote_statistics(pool: &PgPool) -> Result<VoteStatisticsResponse> {
    let total_users = UserRepository::new(pool).count().await?;
    let weeks = BallotRepository::new(pool).week_stats().await?;

    Ok(VoteStatisticsResponse { total_users, weeks })
}

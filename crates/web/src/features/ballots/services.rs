use std::collections::BTreeMap;

use sqlx::PgPool;
use storage::error::Result;
use storage::repository::ballots::BallotRepository;
use storage::repository::teams::TeamRepository;
use storage::services::ballots::{build_ballot, group_by_week};
use uuid::Uuid;

/// Replace the user's ballot for a week with the submitted rankings.
///
/// Unknown team names are dropped, duplicates collapse to their first
/// position, and the ballot is capped at the scoring depth; what
/// survives is written in a single transaction that discards the prior
/// ballot. Returns the stored ballot as the caller will now read it.
pub async fn submit_ballot(
    pool: &PgPool,
    user_id: Uuid,
    week: i32,
    rankings: &[String],
) -> Result<Vec<String>> {
    let directory = TeamRepository::new(pool).resolve_names(rankings).await?;
    let entries = build_ballot(user_id, week, rankings, &directory);

    let repo = BallotRepository::new(pool);
    repo.replace(user_id, week, &entries).await?;

    repo.get_ballot(user_id, week).await
}

/// The user's ballot for one week, empty if none was submitted
pub async fn get_ballot(pool: &PgPool, user_id: Uuid, week: i32) -> Result<Vec<String>> {
    let repo = BallotRepository::new(pool);
    repo.get_ballot(user_id, week).await
}

/// All of the user's ballots, keyed by week
pub async fn get_user_ballots(pool: &PgPool, user_id: Uuid) -> Result<BTreeMap<i32, Vec<String>>> {
    let rows = BallotRepository::new(pool).list_for_user(user_id).await?;

    Ok(group_by_week(rows))
}

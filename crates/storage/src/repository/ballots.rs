use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::stats::WeekVoteStats;
use crate::error::Result;
use crate::models::BallotEntry;

/// A (week, rank, team name) row from one user's history
#[derive(FromRow)]
pub struct UserBallotRow {
    pub week: i32,
    pub rank: i32,
    pub team_name: String,
}

/// A (team name, rank) row in consensus scope; the voter is irrelevant
/// to scoring
#[derive(FromRow)]
pub struct ScoredEntryRow {
    pub team_name: String,
    pub rank: i32,
}

/// A single entry attributed to its voter, for the per-week breakdown
#[derive(FromRow)]
pub struct WeekBallotRow {
    pub username: String,
    pub team_name: String,
    pub rank: i32,
}

pub struct BallotRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BallotRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Atomically replace the user's ballot for a week. Prior entries
    /// are deleted and the new ones inserted inside one transaction, so
    /// concurrent readers see either the old ballot or the new one,
    /// never a mix or a transient empty state. Any failure rolls the
    /// whole replacement back, leaving the previous ballot intact.
    pub async fn replace(&self, user_id: Uuid, week: i32, entries: &[BallotEntry]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ballot_entries WHERE user_id = $1 AND week = $2")
            .bind(user_id)
            .bind(week)
            .execute(&mut *tx)
            .await?;

        if !entries.is_empty() {
            let mut query = QueryBuilder::new(
                "INSERT INTO ballot_entries (entry_id, user_id, week, team_id, rank) ",
            );
            query.push_values(entries, |mut b, entry| {
                b.push_bind(entry.entry_id)
                    .push_bind(entry.user_id)
                    .push_bind(entry.week)
                    .push_bind(entry.team_id)
                    .push_bind(entry.rank);
            });
            query.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Team names of one ballot, ascending by rank. Empty if the user
    /// has not voted that week.
    pub async fn get_ballot(&self, user_id: Uuid, week: i32) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT t.name
            FROM ballot_entries be
            JOIN teams t ON be.team_id = t.team_id
            WHERE be.user_id = $1 AND be.week = $2
            ORDER BY be.rank
            "#,
        )
        .bind(user_id)
        .bind(week)
        .fetch_all(self.pool)
        .await?;

        Ok(names)
    }

    /// Every entry the user has ever cast, ordered for grouping into
    /// per-week ballots
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserBallotRow>> {
        let rows = sqlx::query_as::<_, UserBallotRow>(
            r#"
            SELECT be.week, be.rank, t.name AS team_name
            FROM ballot_entries be
            JOIN teams t ON be.team_id = t.team_id
            WHERE be.user_id = $1
            ORDER BY be.week, be.rank
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// All entries across all users for one week
    pub async fn week_entries(&self, week: i32) -> Result<Vec<ScoredEntryRow>> {
        let rows = sqlx::query_as::<_, ScoredEntryRow>(
            r#"
            SELECT t.name AS team_name, be.rank
            FROM ballot_entries be
            JOIN teams t ON be.team_id = t.team_id
            WHERE be.week = $1
            "#,
        )
        .bind(week)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// All entries across all users and all weeks
    pub async fn all_entries(&self) -> Result<Vec<ScoredEntryRow>> {
        let rows = sqlx::query_as::<_, ScoredEntryRow>(
            r#"
            SELECT t.name AS team_name, be.rank
            FROM ballot_entries be
            JOIN teams t ON be.team_id = t.team_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// One week's entries attributed to their voters, ordered by
    /// username then rank
    pub async fn week_entries_by_voter(&self, week: i32) -> Result<Vec<WeekBallotRow>> {
        let rows = sqlx::query_as::<_, WeekBallotRow>(
            r#"
            SELECT u.username, t.name AS team_name, be.rank
            FROM ballot_entries be
            JOIN users u ON be.user_id = u.user_id
            JOIN teams t ON be.team_id = t.team_id
            WHERE be.week = $1
            ORDER BY u.username, be.rank
            "#,
        )
        .bind(week)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-week participation: distinct voters and raw entry counts
    pub async fn week_stats(&self) -> Result<Vec<WeekVoteStats>> {
        let rows = sqlx::query_as::<_, WeekVoteStats>(
            r#"
            SELECT week,
                   COUNT(DISTINCT user_id) AS voters,
                   COUNT(*) AS total_votes
            FROM ballot_entries
            GROUP BY week
            ORDER BY week
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

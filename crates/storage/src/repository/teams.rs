use std::collections::HashMap;

use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use crate::error::Result;
use crate::models::Team;

#[derive(FromRow)]
struct TeamNameRow {
    team_id: Uuid,
    name: String,
}

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Full roster, alphabetical
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name
            FROM teams
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Resolve a batch of display names to team ids. Names with no
    /// matching team are simply absent from the returned map; the
    /// caller decides what to do with them.
    pub async fn resolve_names(&self, names: &[String]) -> Result<HashMap<String, Uuid>> {
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, TeamNameRow>(
            r#"
            SELECT team_id, name
            FROM teams
            WHERE name = ANY($1)
            "#,
        )
        .bind(names)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| (r.name, r.team_id)).collect())
    }

    /// Seed-time upsert: inserts any team names not already present,
    /// leaves existing rows untouched. Returns the number of new rows.
    pub async fn upsert_names(&self, names: &[String]) -> Result<u64> {
        if names.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::new("INSERT INTO teams (name) ");
        query.push_values(names, |mut b, name| {
            b.push_bind(name);
        });
        query.push(" ON CONFLICT (name) DO NOTHING");

        let result = query.build().execute(self.pool).await?;

        Ok(result.rows_affected())
    }
}

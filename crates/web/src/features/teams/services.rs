use sqlx::PgPool;
use storage::error::Result;
use storage::models::Team;
use storage::repository::teams::TeamRepository;

pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

use sqlx::FromRow;
use uuid::Uuid;

/// A registered voter. Immutable after creation; the hash never leaves
/// the storage and auth layers.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: chrono::NaiveDateTime,
}

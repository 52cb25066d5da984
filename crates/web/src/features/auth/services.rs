use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use sqlx::PgPool;
use storage::models::User;
use storage::repository::users::UserRepository;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Create an account with an argon2id-hashed credential. A taken
/// username surfaces as a conflict; no partial account is left behind.
pub async fn register(pool: &PgPool, username: &str, password: &str) -> WebResult<User> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| WebError::InternalServerError(format!("Password hashing failed: {e}")))?
        .to_string();

    let user = UserRepository::new(pool)
        .create(username, &password_hash)
        .await?;

    Ok(user)
}

/// Verify credentials. Unknown usernames and wrong passwords both
/// answer `Unauthorized`, so callers cannot probe for accounts.
pub async fn authenticate(pool: &PgPool, username: &str, password: &str) -> WebResult<User> {
    let user = UserRepository::new(pool)
        .find_by_username(username)
        .await?
        .ok_or(WebError::Unauthorized)?;

    let parsed = PasswordHash::new(&user.password_hash)
        .map_err(|e| WebError::InternalServerError(format!("Stored credential malformed: {e}")))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| WebError::Unauthorized)?;

    Ok(user)
}

pub async fn current_user(pool: &PgPool, user_id: Uuid) -> WebResult<User> {
    let user = UserRepository::new(pool).find_by_id(user_id).await?;

    Ok(user)
}

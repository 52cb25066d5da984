//! Typed accessor for the authenticated user id held in the session
//! cookie. Every ballot operation takes the user id from here rather
//! than from any ambient state.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::WebError;

pub const SESSION_USER_ID_KEY: &str = "poll:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub Uuid);

impl SessionUserId {
    /// Record the user id after a successful login
    pub async fn insert(session: &Session, user_id: Uuid) -> Result<(), WebError> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Current user id, if the session is authenticated
    pub async fn get(session: &Session) -> Result<Option<Uuid>, WebError> {
        let user_id = session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id);

        Ok(user_id)
    }

    /// Drop the whole session on logout
    pub async fn clear(session: &Session) -> Result<(), WebError> {
        session.flush().await?;

        Ok(())
    }
}

/// The user id for this request, or `Unauthorized` if nobody is logged
/// in
pub async fn require_user(session: &Session) -> Result<Uuid, WebError> {
    SessionUserId::get(session)
        .await?
        .ok_or(WebError::Unauthorized)
}

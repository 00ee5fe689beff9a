//! Type-safe session access for the caller identity.
//!
//! The OAuth sign-in flow lives outside this service; whatever performs it
//! stores the caller's id and access token in the shared session store.
//! `AuthSession` wraps the raw session with typed accessors so the rest of
//! the code never touches session keys directly.

use tower_sessions::Session;

use crate::{error::AppError, model::identity::Identity};

// Session key constants
const SESSION_AUTH_CALLER_ID: &str = "auth:caller_id";
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";

/// Authentication session management.
///
/// Handles the caller identity stored in the session: the caller's Discord
/// id and the OAuth access token used for Discord API calls on their behalf.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the caller identity in the session.
    ///
    /// Called by the auth layer after a successful sign-in; this service
    /// itself only ever reads the identity back.
    ///
    /// # Arguments
    /// - `identity` - The caller id and access token to store
    ///
    /// # Returns
    /// - `Ok(())` - Identity successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_identity(&self, identity: &Identity) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_CALLER_ID, identity.caller_id.clone())
            .await?;
        self.session
            .insert(SESSION_AUTH_ACCESS_TOKEN, identity.access_token.clone())
            .await?;
        Ok(())
    }

    /// Retrieves the caller identity from the session.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - Caller is signed in
    /// - `Ok(None)` - No identity in session (not signed in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn identity(&self) -> Result<Option<Identity>, AppError> {
        let Some(caller_id) = self.session.get::<String>(SESSION_AUTH_CALLER_ID).await? else {
            return Ok(None);
        };
        let Some(access_token) = self
            .session
            .get::<String>(SESSION_AUTH_ACCESS_TOKEN)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(Identity {
            caller_id,
            access_token,
        }))
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove the stored identity.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

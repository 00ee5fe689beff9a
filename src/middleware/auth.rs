use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::identity::Identity,
};

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the caller identity or fails the request with 401.
    pub async fn require(&self) -> Result<Identity, AppError> {
        let Some(identity) = AuthSession::new(self.session).identity().await? else {
            return Err(AuthError::IdentityNotInSession.into());
        };

        Ok(identity)
    }
}

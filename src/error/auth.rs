use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No caller identity in the session.
    ///
    /// The auth layer never signed this caller in, or the session expired.
    /// Results in a 401 Unauthorized response; getting the caller signed in
    /// again is the dashboard's job, not this service's.
    #[error("No authenticated caller in session")]
    IdentityNotInSession,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For missing caller identity
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::IdentityNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not signed in. Please sign in again.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

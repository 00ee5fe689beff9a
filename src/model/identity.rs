/// Caller identity issued by the session/auth layer.
///
/// This service only consumes the identity; sign-in, token issuance and
/// refresh all live outside this repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Stable Discord user id of the caller.
    pub caller_id: String,
    /// OAuth bearer token used for Discord API calls on the caller's behalf.
    pub access_token: String,
}

use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::server::controller::auth::FAILURE_PATH;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The callback arrived but no CSRF token was stored for this session.
    #[error("Failed to login user due to missing CSRF state in session")]
    CsrfMissingValue,

    /// Google redirected back with an error instead of an authorization code.
    #[error("Identity provider returned an error: {0}")]
    ProviderDenied(String),

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// The userinfo request failed or returned an unusable profile.
    #[error("Failed to fetch Google profile: {0}")]
    ProfileFetch(String),

    /// Login was attempted while no OAuth client is configured.
    #[error("Login is not configured for this deployment")]
    NotConfigured,
}

impl<RE, T> From<oauth2::RequestTokenError<RE, T>> for AuthError
where
    RE: std::error::Error + 'static,
    T: oauth2::ErrorResponse + 'static,
{
    fn from(err: oauth2::RequestTokenError<RE, T>) -> Self {
        AuthError::TokenExchange(err.to_string())
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Every handshake failure ends the flow on the terminal failure page rather than
/// returning an error payload. The cause is logged at warn level for diagnostics
/// while the client only sees the generic failure message.
///
/// # Returns
/// - 303 See Other - Redirect to `/failure`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("Login failed: {}", self);

        Redirect::to(FAILURE_PATH).into_response()
    }
}

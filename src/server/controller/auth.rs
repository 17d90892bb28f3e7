use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Extension, Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::ProfileDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::CurrentUser,
            session::{AuthSession, CsrfSession},
        },
        service::oauth::GoogleAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Entry point of the login handshake; anonymous requests are sent here.
pub const LOGIN_PATH: &str = "/auth/google";
pub const PROTECTED_PATH: &str = "/protected";
/// Terminal page for any handshake failure.
pub const FAILURE_PATH: &str = "/failure";

/// Query parameters for the OAuth callback endpoint.
///
/// Google sends either `code` and `state`, or `error` when the user declined.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Authorization code for the token exchange.
    pub code: Option<String>,
    /// Error reported by Google instead of a code.
    pub error: Option<String>,
}

/// Start the Google login handshake.
///
/// Stores a CSRF token in the session and redirects to Google's consent screen,
/// requesting the profile and email scopes. When no OAuth client is configured the
/// gate is disabled, so the client is sent straight to the protected page.
///
/// # Returns
/// - `303 See Other` - Redirect to Google, or to `/protected` when login is not configured
/// - `500 Internal Server Error` - Failed to store the CSRF token
#[utoipa::path(
    get,
    path = "/auth/google",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to Google consent screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(oauth_client) = state.oauth_client.as_ref() else {
        return Ok(Redirect::to(PROTECTED_PATH));
    };

    let auth_service = GoogleAuthService::new(&state.http_client, oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::to(url.as_str()))
}

/// Complete the Google login handshake.
///
/// Validates the CSRF token, exchanges the authorization code, fetches the Google
/// profile and stores it as the session identity.
///
/// # Returns
/// - `303 See Other` - Redirect to `/protected` on success
/// - `303 See Other` - Redirect to `/failure` on any handshake error, including a
///   failed profile fetch
/// - `500 Internal Server Error` - Session store failure
#[utoipa::path(
    get,
    path = "/auth/google/callback",
    tag = AUTH_TAG,
    params(
        ("state" = Option<String>, Query, description = "CSRF state token"),
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("error" = Option<String>, Query, description = "Error returned by Google")
    ),
    responses(
        (status = 303, description = "Redirect to /protected on success or /failure on error"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let oauth_client = state.oauth_client.as_ref().ok_or(AuthError::NotConfigured)?;

    if let Some(error) = params.error {
        return Err(AuthError::ProviderDenied(error).into());
    }

    validate_csrf(&session, params.state.as_deref()).await?;

    let code = params.code.ok_or(AuthError::ProviderDenied(
        "callback did not include an authorization code".to_string(),
    ))?;

    let identity = GoogleAuthService::new(&state.http_client, oauth_client)
        .callback(code)
        .await?;

    AuthSession::new(&session).set_identity(&identity).await?;

    Ok(Redirect::to(PROTECTED_PATH))
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let Some(stored_state) = CsrfSession::new(session).take_token().await? else {
        return Err(AuthError::CsrfMissingValue.into());
    };

    if csrf_state != Some(stored_state.as_str()) {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    Ok(())
}

/// Sign out.
///
/// Destroys the session and redirects home. A failure to destroy the session is
/// logged; the client is still redirected.
///
/// # Returns
/// - `303 See Other` - Redirect to `/`
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to the home page")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    match AuthSession::new(&session).end().await {
        Ok(()) => tracing::info!("User signed out"),
        Err(err) => tracing::error!("Failed to end session during logout: {}", err),
    }

    Redirect::to("/")
}

/// Terminal page for a failed login.
#[utoipa::path(
    get,
    path = "/failure",
    tag = AUTH_TAG,
    responses(
        (status = 401, description = "Login failed", body = ErrorDto)
    ),
)]
pub async fn failure() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorDto {
            error: "Failed to authenticate with Google".to_string(),
        }),
    )
}

/// Greet the signed-in user.
///
/// Guarded by the auth gate. With the gate disabled nobody may be signed in, in
/// which case a guest greeting is returned.
///
/// # Returns
/// - `200 OK` - Profile of the current user
#[utoipa::path(
    get,
    path = "/protected",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Profile of the signed-in user", body = ProfileDto),
        (status = 303, description = "Not signed in; redirect to /auth/google")
    ),
)]
pub async fn protected(
    Extension(CurrentUser(identity)): Extension<CurrentUser>,
) -> impl IntoResponse {
    let profile = match identity {
        Some(identity) => ProfileDto {
            message: format!("Hello, {}!", identity.name),
            id: identity.id,
            name: identity.name,
            email: identity.email,
        },
        None => ProfileDto {
            id: String::new(),
            name: "guest".to_string(),
            email: None,
            message: "Hello, guest!".to_string(),
        },
    };

    (StatusCode::OK, Json(profile))
}

//! Authentication gate for protected routes.
//!
//! The gate is a single decision point shared by every guarded route. When enabled it
//! reads the signed-in identity from the session and either lets the request through or
//! redirects the client to the login route. When disabled it passes every request
//! through without touching the session.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::server::{
    controller::auth::LOGIN_PATH, error::AppError, middleware::session::AuthSession,
    model::identity::Identity, state::AppState,
};

/// Whether the current request carries a signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated(Identity),
    Anonymous,
}

impl From<Option<Identity>> for AuthState {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => AuthState::Authenticated(identity),
            None => AuthState::Anonymous,
        }
    }
}

impl AuthState {
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            AuthState::Authenticated(identity) => Some(identity),
            AuthState::Anonymous => None,
        }
    }
}

/// Outcome of evaluating the gate for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Hand the request to the route handler.
    Continue,
    /// Send the client to the login route.
    Redirect,
}

/// Deployment-wide switch deciding whether guarded routes require a login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthGate {
    enabled: bool,
}

impl AuthGate {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled() -> Self {
        Self::new(true)
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Decides whether a request in `state` may proceed.
    ///
    /// A disabled gate treats every request as authenticated.
    pub fn decide(&self, state: &AuthState) -> GateDecision {
        match (self.enabled, state) {
            (false, _) => GateDecision::Continue,
            (true, AuthState::Authenticated(_)) => GateDecision::Continue,
            (true, AuthState::Anonymous) => GateDecision::Redirect,
        }
    }
}

/// Identity of the caller, inserted into request extensions by [`require_auth`].
///
/// `None` when the gate is disabled and nobody has signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser(pub Option<Identity>);

/// Result of checking a request against the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(CurrentUser),
    Denied,
}

/// Evaluates the gate against the identity stored in a session.
pub struct AuthGuard<'a> {
    session: &'a Session,
    gate: AuthGate,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session, gate: AuthGate) -> Self {
        Self { session, gate }
    }

    /// Checks whether the session may access a guarded route.
    ///
    /// # Returns
    /// - `Ok(Access::Granted(_))` - Gate disabled, or a user is signed in
    /// - `Ok(Access::Denied)` - Gate enabled and no identity in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn check(&self) -> Result<Access, AppError> {
        if !self.gate.is_enabled() {
            return Ok(Access::Granted(CurrentUser(None)));
        }

        let state = AuthState::from(AuthSession::new(self.session).get_identity().await?);

        match self.gate.decide(&state) {
            GateDecision::Continue => Ok(Access::Granted(CurrentUser(state.into_identity()))),
            GateDecision::Redirect => Ok(Access::Denied),
        }
    }
}

/// Axum middleware applied to every guarded route.
///
/// # Returns
/// - The downstream response with [`CurrentUser`] available to the handler
/// - 303 See Other to the login route when the gate denies the request
/// - 500 Internal Server Error when the session cannot be read
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match AuthGuard::new(&session, state.auth_gate).check().await? {
        Access::Granted(current_user) => {
            request.extensions_mut().insert(current_user);
            Ok(next.run(request).await)
        }
        Access::Denied => {
            tracing::debug!(path = %request.uri().path(), "Redirecting anonymous request to login");
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
    }
}

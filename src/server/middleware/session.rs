//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos in session keys and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - The signed-in Google identity and session lifecycle
//! - `CsrfSession` - CSRF token management for the OAuth handshake
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::server::{error::AppError, model::identity::Identity};

// Session key constants
const SESSION_AUTH_IDENTITY: &str = "auth:identity";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Handles the authenticated user's identity as returned by Google and the
/// session lifecycle operations used by login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed-in identity in the session.
    ///
    /// The session id is cycled first so an identifier issued before login
    /// cannot be reused for the authenticated session.
    ///
    /// # Arguments
    /// - `identity` - Profile returned by the identity provider
    ///
    /// # Returns
    /// - `Ok(())` - Identity successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_identity(&self, identity: &Identity) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_IDENTITY, identity).await?;
        Ok(())
    }

    /// Retrieves the signed-in identity from the session.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_identity(&self) -> Result<Option<Identity>, AppError> {
        let identity = self.session.get::<Identity>(SESSION_AUTH_IDENTITY).await?;
        Ok(identity)
    }

    /// Checks if a user is currently logged in.
    ///
    /// # Returns
    /// - `Ok(true)` - User is logged in
    /// - `Ok(false)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_identity().await?.is_some())
    }

    /// Ends the session, removing the identity and any pending handshake state.
    ///
    /// Unlike a plain clear, the backing store record is deleted as well, so a
    /// stale cookie cannot resurrect the session.
    ///
    /// # Returns
    /// - `Ok(())` - Session destroyed
    /// - `Err(AppError::SessionErr(_))` - The session store rejected the deletion
    pub async fn end(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for the OAuth handshake. Tokens are
/// stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new CsrfSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Arguments
    /// - `token` - The CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used for a single callback.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

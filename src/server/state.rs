//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for requests to Google
//! - OAuth2 client for Google authentication, when configured
//! - The auth gate deciding whether guarded routes require a login
//! - The GraphQL schema

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    graphql::{create_schema, DanceSchema},
    middleware::auth::AuthGate,
};

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `AuthGate` is `Copy`
/// - `DanceSchema` is reference-counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for the token exchange and the userinfo request.
    ///
    /// Configured without redirects to prevent SSRF vulnerabilities.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google login flow.
    ///
    /// `None` when no Google credentials are configured, which is only allowed
    /// while the gate is disabled.
    pub oauth_client: Option<OAuth2Client>,

    /// Decides whether guarded routes require a signed-in identity.
    pub auth_gate: AuthGate,

    /// GraphQL schema sharing the database connection above.
    pub schema: DanceSchema,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// The GraphQL schema is built here so it always resolves against the same
    /// database connection as the REST handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Google authentication, if configured
    /// - `auth_gate` - Whether guarded routes require a login
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: Option<OAuth2Client>,
        auth_gate: AuthGate,
    ) -> Self {
        let schema = create_schema(db.clone());

        Self {
            db,
            http_client,
            oauth_client,
            auth_gate,
            schema,
        }
    }
}

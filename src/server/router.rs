//! Route table and middleware chain.
//!
//! Requests pass through the layers in this order before reaching a route:
//!
//! 1. panic catcher (turns a handler panic into the generic 500)
//! 2. request tracing
//! 3. CORS
//! 4. body size limit
//! 5. session
//! 6. auth gate (guarded routes only)
//!
//! Unmatched paths and unsupported methods fall through to the JSON 404 fallback.
//! `AppError` values returned by handlers are mapped to responses by their
//! `IntoResponse` implementation.

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tower_sessions::{
    cookie::{Key, SameSite},
    Expiry, SessionManagerLayer, SessionStore,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth, dance_class, dancer,
        home::{self, route_not_found},
    },
    error::{AppError, InternalServerError},
    graphql::handler::{graphiql, graphql_handler, GRAPHQL_PATH},
    middleware::auth::require_auth,
    startup,
    state::AppState,
};

/// Largest accepted request body.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;
const SESSION_INACTIVITY_DAYS: i64 = 7;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dance API",
        version = "1.0.0",
        description = "API Documentation for the Dance Project"
    ),
    tags(
        (name = "dancers", description = "Dancer management"),
        (name = "danceclasses", description = "Dance class management"),
        (name = "auth", description = "Google login and session handling"),
        (name = "home", description = "Landing page")
    )
)]
pub struct ApiDoc;

/// Settings for the HTTP layers that depend on the deployment mode.
pub struct RouterConfig {
    pub session_key: Key,
    pub secure_cookies: bool,
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl RouterConfig {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            session_key: startup::session_key(config)?,
            secure_cookies: config.secure_cookies(),
            cors_origins: config.auth_enabled().then(|| config.cors_origins.clone()),
        })
    }
}

/// Builds the complete application router.
///
/// # Arguments
/// - `state` - Shared application state
/// - `session_store` - Backing store for sessions (SQLite in production, memory in tests)
/// - `config` - Cookie and CORS settings
pub fn router<Store>(state: AppState, session_store: Store, config: RouterConfig) -> Router
where
    Store: SessionStore + Clone,
{
    let (guarded, guarded_api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(dancer::get_dancers, dancer::create_dancer))
        .routes(routes!(
            dancer::get_dancer,
            dancer::update_dancer,
            dancer::delete_dancer
        ))
        .routes(routes!(
            dance_class::get_dance_classes,
            dance_class::create_dance_class
        ))
        .routes(routes!(
            dance_class::get_dance_class,
            dance_class::update_dance_class,
            dance_class::delete_dance_class
        ))
        .routes(routes!(auth::protected))
        .split_for_parts();

    let (public, public_api) = OpenApiRouter::<AppState>::new()
        .routes(routes!(home::home))
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::failure))
        .split_for_parts();

    let mut openapi = guarded_api;
    openapi.merge(public_api);

    let guarded = guarded
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
        .with_signed(config.session_key);

    let layers = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.cors_origins.as_deref()))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(session_layer);

    Router::new()
        .merge(public)
        .merge(guarded)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(layers)
        .with_state(state)
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    match origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            if origins.is_empty() {
                tracing::warn!("CORS: no origins configured, cross-origin requests are refused");
            } else {
                tracing::info!("CORS: Restricting to {} origin(s)", origins.len());
            }

            CorsLayer::new()
                .allow_origin(origins)
                .allow_credentials(true)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        }
        None => {
            tracing::warn!("CORS: Allowing all origins (dev mode)");
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin)
        }
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(format!("Handler panicked: {detail}")).into_response()
}

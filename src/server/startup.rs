use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_sessions::cookie::Key;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::oauth::{GOOGLE_AUTH_URL, GOOGLE_TOKEN_URL},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations so both the
/// `dancer` and `dance_class` collections exist before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store on the application database.
///
/// Sessions share the SQLite pool with the entity tables; the store's own table is
/// created on first start.
///
/// # Returns
/// - `Ok(SqliteStore)` - Store with its table migrated
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session_store(db: &DatabaseConnection) -> Result<SqliteStore, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(session_store)
}

/// Derives the cookie signing key.
///
/// Development without `SESSION_SECRET` gets a random key, so sessions do not
/// survive a restart.
///
/// # Returns
/// - `Ok(Key)` - Signing key for the session cookie
/// - `Err(AppError::ConfigErr)` - `SESSION_SECRET` is too short to sign with
pub fn session_key(config: &Config) -> Result<Key, AppError> {
    match &config.session_secret {
        Some(secret) => Key::try_from(secret.as_bytes()).map_err(|e| {
            ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: e.to_string(),
            }
            .into()
        }),
        None => {
            tracing::warn!("SESSION_SECRET not set, using a random session key");
            Ok(Key::generate())
        }
    }
}

/// Builds the HTTP client used for the token exchange and the userinfo request.
///
/// Redirects are disabled so a provider response cannot steer requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Google OAuth2 client when credentials are configured.
///
/// # Returns
/// - `Ok(Some(OAuth2Client))` - Client ready to start the handshake
/// - `Ok(None)` - No Google credentials configured
/// - `Err(AppError::ConfigErr)` - The callback URL is not a valid URL
pub fn setup_oauth_client(config: &Config) -> Result<Option<OAuth2Client>, AppError> {
    let Some(google) = &config.google else {
        return Ok(None);
    };

    let invalid_url = |name: &str, err: url::ParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    };

    let client = BasicClient::new(ClientId::new(google.client_id.clone()))
        .set_client_secret(ClientSecret::new(google.client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(GOOGLE_AUTH_URL.to_string())
                .map_err(|e| invalid_url("GOOGLE_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
                .map_err(|e| invalid_url("GOOGLE_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(google.callback_url.clone())
                .map_err(|e| invalid_url("GOOGLE_CALLBACK_URL", e))?,
        );

    Ok(Some(client))
}

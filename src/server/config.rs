use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
/// Minimum key material accepted for signing session cookies.
const MIN_SESSION_SECRET_LEN: usize = 64;

/// Deployment mode selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            other => Err(ConfigError::InvalidEnvVar {
                name: "APP_ENV".to_string(),
                reason: format!("expected `development` or `production`, got `{other}`"),
            }),
        }
    }
}

/// Google OAuth2 credentials.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub app_env: AppEnv,

    /// Required in production; development falls back to a per-process key.
    pub session_secret: Option<String>,
    /// Required in production; without it the login routes cannot start a handshake.
    pub google: Option<GoogleConfig>,
    /// Allowed origins in production. Empty in development, where any origin is allowed.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let app_env = match var("APP_ENV") {
            Some(value) => AppEnv::parse(&value)?,
            None => AppEnv::Development,
        };
        let production = app_env == AppEnv::Production;

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: format!("{e}"),
            })?,
            None => DEFAULT_PORT,
        };

        let session_secret = if production {
            Some(required("SESSION_SECRET")?)
        } else {
            var("SESSION_SECRET")
        };
        if let Some(secret) = &session_secret {
            if secret.len() < MIN_SESSION_SECRET_LEN {
                return Err(ConfigError::InvalidEnvVar {
                    name: "SESSION_SECRET".to_string(),
                    reason: format!("must be at least {MIN_SESSION_SECRET_LEN} bytes"),
                }
                .into());
            }
        }

        let google = if production {
            Some(GoogleConfig {
                client_id: required("GOOGLE_CLIENT_ID")?,
                client_secret: required("GOOGLE_CLIENT_SECRET")?,
                callback_url: required("GOOGLE_CALLBACK_URL")?,
            })
        } else {
            match (
                var("GOOGLE_CLIENT_ID"),
                var("GOOGLE_CLIENT_SECRET"),
                var("GOOGLE_CALLBACK_URL"),
            ) {
                (Some(client_id), Some(client_secret), Some(callback_url)) => Some(GoogleConfig {
                    client_id,
                    client_secret,
                    callback_url,
                }),
                _ => None,
            }
        };

        let cors_origins = var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            app_env,
            session_secret,
            google,
            cors_origins,
        })
    }

    /// Production deployments require a login on guarded routes.
    pub fn auth_enabled(&self) -> bool {
        self.app_env == AppEnv::Production
    }

    /// Session cookies are only marked `Secure` in production.
    pub fn secure_cookies(&self) -> bool {
        self.app_env == AppEnv::Production
    }
}

use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::oauth::GoogleAuthService;

/// Scopes requested from Google: profile and email only.
const SCOPES: [&str; 3] = ["openid", "profile", "email"];

impl<'a> GoogleAuthService<'a> {
    /// Builds the Google consent URL and the CSRF token the callback must echo.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        (authorize_url, csrf_state)
    }
}

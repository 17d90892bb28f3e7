//! OAuth2 login with Google

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

pub struct GoogleAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Where the profile is fetched after the code exchange.
    pub userinfo_url: &'a str,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
            userinfo_url: GOOGLE_USERINFO_URL,
        }
    }

    pub fn with_userinfo_url(mut self, userinfo_url: &'a str) -> Self {
        self.userinfo_url = userinfo_url;
        self
    }
}

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::identity::Identity,
    service::oauth::GoogleAuthService,
};

/// Subset of the OpenID Connect userinfo document we keep.
#[derive(Debug, Deserialize)]
struct GoogleProfile {
    sub: String,
    name: Option<String>,
    email: Option<String>,
}

impl From<GoogleProfile> for Identity {
    fn from(profile: GoogleProfile) -> Self {
        let name = profile
            .name
            .or_else(|| profile.email.clone())
            .unwrap_or_else(|| profile.sub.clone());

        Identity {
            id: profile.sub,
            name,
            email: profile.email,
        }
    }
}

impl<'a> GoogleAuthService<'a> {
    /// Completes the handshake: exchanges the code, then fetches the profile.
    pub async fn callback(&self, authorization_code: String) -> Result<Identity, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let profile = self.fetch_google_profile(&token).await?;

        tracing::info!(user_id = %profile.sub, "User signed in with Google");

        Ok(profile.into())
    }

    /// Retrieves the Google profile using the provided access token
    ///
    /// Any transport error, non-success status or undecodable body is a handshake
    /// failure, so the client ends on the failure page.
    async fn fetch_google_profile(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleProfile, AuthError> {
        let access_token = token.access_token().secret();
        let profile_fetch = |e: reqwest::Error| AuthError::ProfileFetch(e.to_string());

        let profile = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(profile_fetch)?
            .error_for_status()
            .map_err(profile_fetch)?
            .json::<GoogleProfile>()
            .await
            .map_err(profile_fetch)?;

        Ok(profile)
    }
}

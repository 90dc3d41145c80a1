use serde::Serialize;
use tracing::{info, warn};

use crate::{
    ApiClient,
    errors::Error,
    request::ApiRequest,
    session::{SessionCredentials, TokenKey},
    types::{LoginRequest, Registration, UserProfile},
};

pub struct Auth<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Auth<'_> {
    /// Exchanges credentials for a token pair and stores both tokens.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionCredentials, Error> {
        let request = ApiRequest::post("/auth/login/").json(&LoginRequest { username, password })?;
        let credentials: SessionCredentials = self.client.send_json(request).await?;
        self.client.session().store_credentials(&credentials)?;
        info!("login ok: user='{}'", username);
        Ok(credentials)
    }

    /// Login followed by a profile fetch, the usual sign-in sequence.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<UserProfile, Error> {
        self.login(username, password).await?;
        self.profile().await
    }

    pub async fn register(&self, registration: &Registration) -> Result<serde_json::Value, Error> {
        self.client
            .send_json(ApiRequest::post("/users/register/").json(registration)?)
            .await
    }

    pub async fn profile(&self) -> Result<UserProfile, Error> {
        self.client.send_json(ApiRequest::get("/users/profile/")).await
    }

    pub async fn update_profile<B: Serialize + ?Sized>(&self, profile: &B) -> Result<UserProfile, Error> {
        self.client
            .send_json(ApiRequest::put("/users/profile/").json(profile)?)
            .await
    }

    /// Drops both tokens. Tokens are stateless, so the backend is not called.
    pub fn logout(&self) {
        for key in TokenKey::ALL {
            self.client.discard(key);
        }
        info!("logged out");
    }

    /// Resumes a stored session by fetching the profile.
    ///
    /// Returns `None` when there is no access token, when the refresh token is
    /// rejected too, or when the backend still rejects the session after the
    /// refresh protocol ran; in those cases both tokens are cleared. Other
    /// failures are returned as errors.
    pub async fn restore_session(&self) -> Result<Option<UserProfile>, Error> {
        if self.client.session().get(TokenKey::Access).is_none() {
            return Ok(None);
        }
        match self.profile().await {
            Ok(profile) => Ok(Some(profile)),
            Err(err) if err.is_unauthorized() => {
                warn!(status = 401, "stored session rejected; clearing tokens");
                self.logout();
                Ok(None)
            }
            Err(Error::RefreshFailed(cause)) => {
                warn!(error = %cause, "stored session could not be refreshed");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

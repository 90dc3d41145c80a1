use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::{
    ApiClient,
    client::REFRESH_PATH,
    config::Config,
    errors::Error,
    navigation::{Navigator, NoopNavigator},
    request::ApiRequest,
    request_context::RequestContext,
    session::{FileSessionStore, MemorySessionStore, SessionStore, TokenKey},
    telemetry::refresh::RefreshTelemetry,
    token::RefreshGuard,
};

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
}

impl ApiClient {
    /// Create a new ApiClient
    /// # Arguments
    /// * `config` - Explicit configuration (`Config`), typically loaded via `Config::from_file` or `Config::from_env`.
    ///
    /// Tokens go to `config.session_file` when set, otherwise to memory.
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let store: Arc<dyn SessionStore> = match &config.session_file {
            Some(path) => Arc::new(FileSessionStore::open(path)?),
            None => Arc::new(MemorySessionStore::new()),
        };
        let mut builder = Client::builder().user_agent(config.user_agent());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        info!(
            base_url = %config.base_url,
            refresh_mode = ?config.refresh_mode,
            "api client ready"
        );
        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_path: config.login_path,
            store,
            navigator: Arc::new(NoopNavigator),
            guard: Arc::new(RefreshGuard::new(config.refresh_mode)),
        })
    }

    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Sends `request`, returning the response for any 2xx status.
    ///
    /// A 401 triggers at most one token refresh and one replay; the caller
    /// only sees the outcome of the replay.
    pub async fn send(&self, request: ApiRequest) -> Result<Response, Error> {
        let mut ctx = RequestContext::new(request, self.store.get(TokenKey::Access));
        loop {
            match self.dispatch(&ctx).await {
                Err(err) if err.is_unauthorized() && !ctx.retried() => {
                    warn!(
                        request = %ctx.request(),
                        status = 401,
                        "request unauthorized; refreshing access token"
                    );
                    let token = self.recover_session(&ctx, err).await?;
                    ctx = ctx.replay_with(token);
                }
                Err(err) if err.is_unauthorized() => {
                    warn!(
                        request = %ctx.request(),
                        status = 401,
                        "replayed request unauthorized; not refreshing again"
                    );
                    return Err(err);
                }
                other => return other,
            }
        }
    }

    /// Sends `request` and decodes the JSON body. An empty body decodes as `null`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        let resp = self.send(request).await?;
        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends `request` and discards the body.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), Error> {
        self.send(request).await?;
        Ok(())
    }

    async fn dispatch(&self, ctx: &RequestContext) -> Result<Response, Error> {
        let resp = ctx
            .request()
            .build(&self.http, &self.base_url, ctx.bearer())?
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            debug!(
                request = %ctx.request(),
                status = status.as_u16(),
                retried = ctx.retried(),
                "request ok"
            );
            return Ok(resp);
        }
        let body = error_body(ctx.request(), status, resp.text().await);
        if status != StatusCode::UNAUTHORIZED {
            error!(
                "request failed: {} status={} body='{}'",
                ctx.request(),
                status,
                body
            );
        }
        Err(Error::Http(status, body))
    }

    /// Gets a new access token after `unauthorized`, or ends the session.
    async fn recover_session(
        &self,
        ctx: &RequestContext,
        unauthorized: Error,
    ) -> Result<String, Error> {
        let telemetry = RefreshTelemetry::new(ctx.request().to_string());
        let Some(refresh_token) = self.store.get(TokenKey::Refresh) else {
            telemetry.emit_skipped("no refresh token stored");
            self.discard(TokenKey::Access);
            return Err(unauthorized);
        };

        let refreshed = self
            .guard
            .refresh(
                ctx.bearer(),
                || self.store.get(TokenKey::Access),
                || self.refresh_access_token(refresh_token),
                &telemetry,
            )
            .await;

        match refreshed {
            Ok(token) => Ok(token),
            Err(Error::SessionEnded) => {
                debug!(request = %ctx.request(), "session already ended by a concurrent refresh");
                Err(Error::RefreshFailed(Box::new(Error::SessionEnded)))
            }
            Err(err) => {
                self.end_session();
                Err(Error::RefreshFailed(Box::new(err)))
            }
        }
    }

    /// Exchanges the refresh token for a new access token and stores it.
    async fn refresh_access_token(&self, refresh_token: String) -> Result<String, Error> {
        let resp = ApiRequest::post(REFRESH_PATH)
            .json(&serde_json::json!({ "refresh": refresh_token }))?
            .build(&self.http, &self.base_url, None)?
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            error!("token refresh rejected: status={} body='{}'", status, body);
            return Err(Error::Http(status, body));
        }
        let refreshed: RefreshResponse = serde_json::from_str(&body)?;
        self.store.set(TokenKey::Access, &refreshed.access)?;
        if let Some(rotated) = refreshed.refresh.as_deref() {
            self.store.set(TokenKey::Refresh, rotated)?;
        }
        info!(
            "access token refreshed (len={}, rotated_refresh={})",
            refreshed.access.len(),
            refreshed.refresh.is_some()
        );
        Ok(refreshed.access)
    }

    /// Clears both tokens and asks the host to show the login view.
    fn end_session(&self) {
        for key in TokenKey::ALL {
            self.discard(key);
        }
        let current = self.navigator.current_path();
        if current.as_deref() == Some(self.login_path.as_str()) {
            debug!("session ended while already on the login view");
            return;
        }
        info!(login_path = %self.login_path, "session ended; redirecting to login");
        self.navigator.redirect_to_login(&self.login_path);
    }

    pub(crate) fn discard(&self, key: TokenKey) {
        if let Err(err) = self.store.remove(key) {
            warn!(key = %key, error = %err, "failed to remove token from session store");
        }
    }
}

/// Body of a non-2xx response; a body that cannot be read is logged and left empty.
fn error_body(request: &ApiRequest, status: StatusCode, body: reqwest::Result<String>) -> String {
    match body {
        Ok(body) => body,
        Err(err) => {
            warn!(
                request = %request,
                status = status.as_u16(),
                error = %err,
                "failed to read error response body"
            );
            String::new()
        }
    }
}

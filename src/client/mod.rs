use std::sync::Arc;

use reqwest::Client;

use crate::navigation::Navigator;
use crate::session::SessionStore;
use crate::token::RefreshGuard;

mod impls;

pub(crate) const REFRESH_PATH: &str = "/auth/refresh/";

/// Single outbound call path for all backend requests.
///
/// Attaches the stored access token, and on a 401 refreshes it once and
/// replays the request. Cloning is cheap; clones share the session store.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    login_path: String,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    guard: Arc<RefreshGuard>,
}

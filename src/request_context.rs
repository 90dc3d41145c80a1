use crate::request::ApiRequest;

/// A request in flight together with its retry marker.
///
/// Each call to `ApiClient::send` owns one context, so concurrent requests
/// never share retry state.
#[derive(Clone, Debug)]
pub struct RequestContext {
    request: ApiRequest,
    bearer: Option<String>,
    retried: bool,
}

impl RequestContext {
    pub fn new(request: ApiRequest, bearer: Option<String>) -> Self {
        Self {
            request,
            bearer,
            retried: false,
        }
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    /// Access token the request is (or was last) sent with.
    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    pub fn retried(&self) -> bool {
        self.retried
    }

    /// Swaps in a refreshed access token for the single replay.
    pub fn replay_with(mut self, token: String) -> Self {
        self.retried = true;
        self.bearer = Some(token);
        self
    }
}

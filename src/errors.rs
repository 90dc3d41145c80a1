use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    Reqwest(reqwest::Error),
    /// Non-2xx response from the backend with its raw body.
    Http(StatusCode, String),
    Config(String),
    Storage(String),
    /// The token refresh call failed; the original 401 is not surfaced.
    RefreshFailed(Box<Error>),
    /// Another request ended the session while this one waited to refresh.
    SessionEnded,
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http(status, _) => Some(*status),
            Error::Reqwest(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Http(StatusCode::UNAUTHORIZED, _))
    }

    /// Human readable message from a structured error body.
    ///
    /// Looks at `detail`, then `error`, then `message`.
    pub fn detail(&self) -> Option<String> {
        let body = match self {
            Error::Http(_, body) => body,
            Error::RefreshFailed(inner) => return inner.detail(),
            _ => return None,
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        ["detail", "error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }

    /// Message for a failure notice, falling back to `fallback` when the body has none.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {err}"),
            Error::Json(err) => write!(f, "json error: {err}"),
            Error::Reqwest(err) => write!(f, "transport error: {err}"),
            Error::Http(status, body) => write!(f, "http {}: {}", status.as_u16(), body),
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Storage(msg) => write!(f, "session storage error: {msg}"),
            Error::RefreshFailed(inner) => write!(f, "token refresh failed: {inner}"),
            Error::SessionEnded => write!(f, "session ended while waiting for a token refresh"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Reqwest(err) => Some(err),
            Error::RefreshFailed(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Reqwest(err)
    }
}

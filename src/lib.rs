//! Authenticated client for the NER annotation backend.
//!
//! [`ApiClient`] attaches the stored bearer token to every request and, on a
//! 401, refreshes the token once and replays the request. Endpoint groups
//! hang off the client (`client.projects()`, `client.documents()`, ...).

pub mod api;
mod client;
pub mod config;
pub mod errors;
pub mod navigation;
pub mod request;
pub mod request_context;
pub mod session;
pub mod telemetry;
pub mod token;
pub mod types;

pub use client::ApiClient;
pub use config::Config;
pub use errors::Error;
pub use navigation::{Navigator, NoopNavigator};
pub use request::{ApiRequest, MultipartForm, UploadFile};
pub use session::{FileSessionStore, MemorySessionStore, SessionCredentials, SessionStore, TokenKey};
pub use token::RefreshMode;

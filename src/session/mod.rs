mod credentials;
mod store;

pub use credentials::{SessionCredentials, TokenKey};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

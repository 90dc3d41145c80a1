mod guard;
mod policy;

pub use guard::{RefreshGuard, RefreshResult};
pub use policy::RefreshMode;

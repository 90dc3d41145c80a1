use std::str::FromStr;

use serde::Deserialize;

use crate::errors::Error;

/// How concurrent 401 responses share token refreshes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
    /// Every failed request runs its own refresh.
    #[default]
    Independent,
    /// Refreshes run one at a time; waiters reuse a token refreshed while they waited.
    Coalesced,
}

impl FromStr for RefreshMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "independent" => Ok(RefreshMode::Independent),
            "coalesced" => Ok(RefreshMode::Coalesced),
            other => Err(Error::Config(format!(
                "Unknown refresh mode '{}'; expected 'independent' or 'coalesced'",
                other
            ))),
        }
    }
}

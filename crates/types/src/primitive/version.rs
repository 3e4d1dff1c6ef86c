use std::fmt;

use serde::{Deserialize, Serialize};

/// Uniswap protocol version a client is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    V2,
    #[default]
    V3
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V2 => write!(f, "v2"),
            Version::V3 => write!(f, "v3")
        }
    }
}

//! User profiles that partition all stored data.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the two independent data partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// Municipal/work context.
    #[serde(rename = "work")]
    Work,
    /// Private context.
    #[serde(rename = "priv")]
    Private,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Work, Profile::Private];

    /// Stable storage id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Private => "priv",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Werk/Gemeente",
            Self::Private => "Privé",
        }
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a profile id is not one of `work|priv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileParseError(pub String);

impl Display for ProfileParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown profile `{}`; expected work|priv", self.0)
    }
}

impl Error for ProfileParseError {}

impl FromStr for Profile {
    type Err = ProfileParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "priv" | "private" => Ok(Self::Private),
            other => Err(ProfileParseError(other.to_string())),
        }
    }
}

use serde::Serialize;
use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Content rating enum.
///
/// The data file may carry any string; only the two restricted ratings are
/// recognised and everything else is treated as suitable for everyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentRating {
    /// Suitable for all audiences
    #[default]
    Everyone,
    /// Mature themes
    Mature,
    /// Adults only
    Adult,
}
impl ContentRating {
    /// Returns the identifier used by the data file and the host.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Everyone => "EVERYONE",
            Self::Mature => "MATURE",
            Self::Adult => "ADULT",
        }
    }
}
impl FromStr for ContentRating {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ADULT" => Self::Adult,
            "MATURE" => Self::Mature,
            _ => Self::Everyone,
        })
    }
}
impl From<Option<&str>> for ContentRating {
    fn from(value: Option<&str>) -> Self {
        value.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}
impl Display for ContentRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

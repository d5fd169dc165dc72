use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Personal-color season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    #[serde(alias = "fall")]
    Autumn,
    Winter,
}

impl Season {
    /// All seasons, in rule-evaluation order
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Canonical lowercase key
    pub fn key(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    pub fn is_warm(self) -> bool {
        matches!(self, Season::Spring | Season::Autumn)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown season: {0}")]
pub struct UnknownSeason(pub String);

impl FromStr for Season {
    type Err = UnknownSeason;

    /// Accepts English keys (`fall` included) case-insensitively, the
    /// localized single-word labels, and the palette display names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" | "봄" | "spring warm" | "봄 웜톤" => Ok(Season::Spring),
            "summer" | "여름" | "summer cool" | "여름 쿨톤" => Ok(Season::Summer),
            "autumn" | "fall" | "가을" | "autumn warm" | "fall warm" | "가을 웜톤" => {
                Ok(Season::Autumn)
            }
            "winter" | "겨울" | "winter cool" | "겨울 쿨톤" => Ok(Season::Winter),
            _ => Err(UnknownSeason(s.to_string())),
        }
    }
}

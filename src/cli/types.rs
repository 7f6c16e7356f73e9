//! Type-safe wrappers for CLI and event-log identifiers.

use crate::error::{MinutesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one match inside a multi-match event log.
///
/// The hosted store keys matches by integer id, exported logs sometimes carry
/// it as text; both are normalized into the same trimmed string.
///
/// # Examples
///
/// ```rust
/// use futsal_minutes::MatchId;
///
/// let id: MatchId = " 17 ".parse().unwrap();
/// assert_eq!(id.as_str(), "17");
/// assert_eq!(id.to_string(), "17");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub String);

impl MatchId {
    /// Create a new MatchId, trimming surrounding whitespace.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Get the underlying identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = MinutesError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MinutesError::InvalidMatchId);
        }
        Ok(Self(trimmed.to_string()))
    }
}

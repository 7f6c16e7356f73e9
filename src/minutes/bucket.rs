//! Accumulation categories and structural bucket keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MinutesError, Result};

/// Lineup combination a bucket tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketCategory {
    Goalkeeper,
    SinglePlayer,
    PlayerPairWithGoalkeeper,
    Pair,
    PairWithGoalkeeper,
    UnitOfFour,
    UnitOfFourWithGoalkeeper,
    TrioWithGoalkeeper,
    TrioWithoutGoalkeeper,
    UnitOfFiveNoGoalkeeper,
}

impl BucketCategory {
    pub const ALL: [BucketCategory; 10] = [
        BucketCategory::Goalkeeper,
        BucketCategory::SinglePlayer,
        BucketCategory::PlayerPairWithGoalkeeper,
        BucketCategory::Pair,
        BucketCategory::PairWithGoalkeeper,
        BucketCategory::UnitOfFour,
        BucketCategory::UnitOfFourWithGoalkeeper,
        BucketCategory::TrioWithGoalkeeper,
        BucketCategory::TrioWithoutGoalkeeper,
        BucketCategory::UnitOfFiveNoGoalkeeper,
    ];

    /// Categories shown when no selection is given.
    pub const DASHBOARD: [BucketCategory; 4] = [
        BucketCategory::Goalkeeper,
        BucketCategory::SinglePlayer,
        BucketCategory::UnitOfFour,
        BucketCategory::UnitOfFiveNoGoalkeeper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BucketCategory::Goalkeeper => "goalkeeper",
            BucketCategory::SinglePlayer => "singlePlayer",
            BucketCategory::PlayerPairWithGoalkeeper => "playerPairWithGoalkeeper",
            BucketCategory::Pair => "pair",
            BucketCategory::PairWithGoalkeeper => "pairWithGoalkeeper",
            BucketCategory::UnitOfFour => "unitOfFour",
            BucketCategory::UnitOfFourWithGoalkeeper => "unitOfFourWithGoalkeeper",
            BucketCategory::TrioWithGoalkeeper => "trioWithGoalkeeper",
            BucketCategory::TrioWithoutGoalkeeper => "trioWithoutGoalkeeper",
            BucketCategory::UnitOfFiveNoGoalkeeper => "unitOfFiveNoGoalkeeper",
        }
    }

    /// Human-readable table heading.
    pub fn title(&self) -> &'static str {
        match self {
            BucketCategory::Goalkeeper => "Goalkeepers",
            BucketCategory::SinglePlayer => "Players",
            BucketCategory::PlayerPairWithGoalkeeper => "Goalkeeper + player",
            BucketCategory::Pair => "Movement pairs",
            BucketCategory::PairWithGoalkeeper => "Goalkeeper + pair",
            BucketCategory::UnitOfFour => "Units of four",
            BucketCategory::UnitOfFourWithGoalkeeper => "Goalkeeper + unit of four",
            BucketCategory::TrioWithGoalkeeper => "Trios (goalkeeper on pitch)",
            BucketCategory::TrioWithoutGoalkeeper => "Trios (no goalkeeper)",
            BucketCategory::UnitOfFiveNoGoalkeeper => "Five movement players",
        }
    }

    /// Whether keys of this category carry the goalkeeper identity.
    pub fn keyed_by_goalkeeper(&self) -> bool {
        matches!(
            self,
            BucketCategory::Goalkeeper
                | BucketCategory::PlayerPairWithGoalkeeper
                | BucketCategory::PairWithGoalkeeper
                | BucketCategory::UnitOfFourWithGoalkeeper
        )
    }
}

impl fmt::Display for BucketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BucketCategory {
    type Err = MinutesError;

    /// Accepts camelCase, kebab-case or snake_case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        BucketCategory::ALL
            .into_iter()
            .find(|c| c.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| MinutesError::InvalidCategory {
                name: s.to_string(),
            })
    }
}

/// Accumulation key: category plus participant identities.
///
/// Players are kept sorted so that keys compare and hash structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketKey {
    pub category: BucketCategory,
    pub goalkeeper: Option<String>,
    pub players: Vec<String>,
}

impl BucketKey {
    pub fn new<S: AsRef<str>>(category: BucketCategory, goalkeeper: Option<&str>, players: &[S]) -> Self {
        let mut players: Vec<String> = players.iter().map(|p| p.as_ref().to_string()).collect();
        players.sort();
        Self {
            category,
            goalkeeper: goalkeeper.map(str::to_string),
            players,
        }
    }

    pub fn goalkeeper(name: &str) -> Self {
        Self::new::<&str>(BucketCategory::Goalkeeper, Some(name), &[])
    }

    pub fn single(player: &str) -> Self {
        Self::new(BucketCategory::SinglePlayer, None, &[player])
    }

    /// All identities, goalkeeper first.
    pub fn identities(&self) -> Vec<&str> {
        self.goalkeeper
            .iter()
            .chain(self.players.iter())
            .map(String::as_str)
            .collect()
    }
}

//! The result of a successfully verified roll.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the bettor won or lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollResult {
    Win,
    Loss,
}

impl RollResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
        }
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verified roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// The recomputed roll, equal to the claimed one.
    pub value: i64,
    pub result: RollResult,
    /// Amount won (`win_value`) or lost (`bet_value`), in Satoshi.
    pub amount: i64,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        self.result == RollResult::Win
    }
}

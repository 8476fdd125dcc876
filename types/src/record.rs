//! The roll record disclosed by the dice service after a roll.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything needed to re-derive a single roll.
///
/// The hex fields are kept in their textual form; decoding is part of
/// verification so that a malformed field is reported as a verification
/// failure rather than a parse failure.
///
/// The service emits PascalCase keys (`ServerHash`, `RollValue`, ...).
/// camelCase and snake_case keys are accepted as well.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RollRecord {
    /// SHA-512 of `server_rand`, published before the roll.
    #[serde(alias = "serverHash", alias = "server_hash")]
    pub server_hash: String,
    /// The server secret, revealed after the roll.
    #[serde(alias = "serverRand", alias = "server_rand")]
    pub server_rand: String,
    /// The client's contribution.
    #[serde(alias = "clientRand", alias = "client_rand")]
    pub client_rand: String,
    /// Rolls strictly below this value win.
    #[serde(alias = "betValue", alias = "bet_value")]
    pub bet_value: i64,
    /// Size of the outcome space `[0, win_value)`.
    #[serde(alias = "winValue", alias = "win_value")]
    pub win_value: i64,
    /// The roll the service claims occurred.
    #[serde(alias = "rollValue", alias = "roll_value")]
    pub roll_value: i64,
}

impl RollRecord {
    /// The hex text of one of the encoded fields.
    pub fn field(&self, field: RollField) -> &str {
        match field {
            RollField::ServerHash => &self.server_hash,
            RollField::ServerRand => &self.server_rand,
            RollField::ClientRand => &self.client_rand,
        }
    }

    pub fn field_mut(&mut self, field: RollField) -> &mut String {
        match field {
            RollField::ServerHash => &mut self.server_hash,
            RollField::ServerRand => &mut self.server_rand,
            RollField::ClientRand => &mut self.client_rand,
        }
    }
}

/// The hex-encoded fields of a [`RollRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollField {
    ServerHash,
    ServerRand,
    ClientRand,
}

impl RollField {
    pub const ALL: [RollField; 3] = [Self::ServerHash, Self::ServerRand, Self::ClientRand];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServerHash => "ServerHash",
            Self::ServerRand => "ServerRand",
            Self::ClientRand => "ClientRand",
        }
    }
}

impl fmt::Display for RollField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

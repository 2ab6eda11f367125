use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocab::{EnumKind, EnumParseError, parse_exact};

/// Whether the engine may answer a question as asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// Answer, surfacing any explicit assumptions.
    Full,
    /// Answer the concept; the final product depends on exam convention.
    Partial,
    /// Reserved. No current rule produces it.
    Refuse,
}

const DECISION_VALUES: &[&str] = &["FULL", "PARTIAL", "REFUSE"];

impl Decision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Decision::Full => "FULL",
            Decision::Partial => "PARTIAL",
            Decision::Refuse => "REFUSE",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Decision] {
        &[Decision::Full, Decision::Partial, Decision::Refuse]
    }

    pub fn parse(raw: &str) -> Result<Self, EnumParseError> {
        parse_exact(
            EnumKind::Decision,
            raw,
            Self::all(),
            Self::as_str,
            DECISION_VALUES,
        )
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Governor verdict for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceResult {
    pub decision: Decision,
    pub assumptions: Vec<String>,
    pub refusal_reason: Option<String>,
    pub notes: String,
}

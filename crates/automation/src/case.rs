use crate::error::AutomationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Automation cases known to the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseName {
    #[serde(rename = "IMLC_001")]
    Imlc001,
    #[serde(rename = "TEST_001")]
    Test001,
}

impl CaseName {
    pub const ALL: [CaseName; 2] = [CaseName::Imlc001, CaseName::Test001];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseName::Imlc001 => "IMLC_001",
            CaseName::Test001 => "TEST_001",
        }
    }

    /// Comma separated list of accepted names, for error messages.
    pub fn valid_options() -> String {
        Self::ALL
            .iter()
            .map(CaseName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn validate(value: &str) -> Result<Self, AutomationError> {
        Self::ALL
            .into_iter()
            .find(|case| case.as_str() == value)
            .ok_or_else(|| AutomationError::InvalidCaseName {
                value: value.to_string(),
            })
    }
}

impl FromStr for CaseName {
    type Err = AutomationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl fmt::Display for CaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

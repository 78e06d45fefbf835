use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Enumerated user classification used to gate navigation entry visibility.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Role {
    #[serde(rename = "CEO")]
    Ceo,
    #[serde(rename = "COO")]
    Coo,
    #[serde(rename = "CFO")]
    Cfo,
    #[serde(rename = "Plant Head")]
    PlantHead,
    #[serde(rename = "VP Production")]
    VpProduction,
    #[serde(rename = "VP Supply Chain")]
    VpSupplyChain,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 6] = [
        Role::Ceo,
        Role::Coo,
        Role::Cfo,
        Role::PlantHead,
        Role::VpProduction,
        Role::VpSupplyChain,
    ];

    /// Canonical display name (e.g. `"VP Supply Chain"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Coo => "COO",
            Self::Cfo => "CFO",
            Self::PlantHead => "Plant Head",
            Self::VpProduction => "VP Production",
            Self::VpSupplyChain => "VP Supply Chain",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Accepts the display name as well as the underscore and compact spellings
    /// used by route tables (`VP_Production`, `vp-supply-chain`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "ceo" => Ok(Self::Ceo),
            "coo" => Ok(Self::Coo),
            "cfo" => Ok(Self::Cfo),
            "planthead" => Ok(Self::PlantHead),
            "vpproduction" => Ok(Self::VpProduction),
            "vpsupplychain" => Ok(Self::VpSupplyChain),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ParseRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Returned when a string does not name a known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown role '{}'; expected one of CEO, COO, CFO, Plant Head, VP Production, VP Supply Chain",
            self.0
        )
    }
}

impl Error for ParseRoleError {}

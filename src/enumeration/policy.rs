use super::error::PolicyError;
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;

/// How a tie with an opponent holding is credited.
///
/// | policy       | win | tie | loss |
/// |--------------|-----|-----|------|
/// | `Strict`     | 1   | 0   | 0    |
/// | `Loose`      | 1   | 1   | 0    |
/// | `HalfCredit` | 1   | ½   | 0    |
///
/// `Loose` counts every holding the hero ties or beats, `HalfCredit`
/// splits ties evenly, `Strict` counts only holdings the hero beats.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    Strict,
    Loose,
    #[serde(rename = "half")]
    HalfCredit,
}

impl TiePolicy {
    pub const fn all() -> [Self; 3] {
        [Self::Strict, Self::Loose, Self::HalfCredit]
    }
    pub const fn tie(&self) -> f64 {
        match self {
            Self::Strict => 0.0,
            Self::Loose => 1.0,
            Self::HalfCredit => 0.5,
        }
    }
    /// credit for one comparison of the hero against an opponent
    pub const fn credit(&self, hero: Ordering) -> f64 {
        match hero {
            Ordering::Greater => 1.0,
            Ordering::Equal => self.tie(),
            Ordering::Less => 0.0,
        }
    }
}

impl std::str::FromStr for TiePolicy {
    type Err = PolicyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "loose" => Ok(Self::Loose),
            "half" | "halfcredit" | "half-credit" => Ok(Self::HalfCredit),
            _ => Err(PolicyError(s.to_string())),
        }
    }
}

impl std::fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Loose => write!(f, "loose"),
            Self::HalfCredit => write!(f, "half"),
        }
    }
}

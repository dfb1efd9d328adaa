//! Named domains and their numeric transforms
//!
//! Each domain maps to one total unary function over `f64`. The functions
//! are tagged variants of [`Transform`] rather than boxed closures.

use crate::constants::{
    AI_DOMAIN, ANALYTICS_DOMAIN, DOMAIN_COUNT, SIMULATION_DOMAIN, SIMULATION_OFFSET,
};
use crate::error::RouterError;
use std::fmt;
use std::str::FromStr;

/// A pure unary numeric transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// x * 2
    Double,
    /// x ** 2
    Square,
    /// x + offset
    Offset(f64),
}

impl Transform {
    /// Apply the transform to a single value
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Double => x * 2.0,
            Self::Square => x * x,
            Self::Offset(offset) => x + offset,
        }
    }
}

/// The fixed set of routable domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Analytics,
    Ai,
    Simulation,
}

impl Domain {
    /// All domains in table order
    pub const ALL: [Domain; DOMAIN_COUNT] = [Domain::Analytics, Domain::Ai, Domain::Simulation];

    /// Table key for this domain
    pub fn name(self) -> &'static str {
        match self {
            Self::Analytics => ANALYTICS_DOMAIN,
            Self::Ai => AI_DOMAIN,
            Self::Simulation => SIMULATION_DOMAIN,
        }
    }

    /// Transform bound to this domain
    pub fn transform(self) -> Transform {
        match self {
            Self::Analytics => Transform::Double,
            Self::Ai => Transform::Square,
            Self::Simulation => Transform::Offset(SIMULATION_OFFSET),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.name() == s)
            .ok_or_else(|| RouterError::UnknownDomain(s.to_string()))
    }
}

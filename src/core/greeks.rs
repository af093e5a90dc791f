//! Option Greeks
//!
//! First order sensitivities of the Black-Scholes value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PricingError;

/// Option Greeks (sensitivities)
///
/// Raw model units: theta per year, vega per unit vol (1.0 = 100%),
/// rho per unit rate. Use [`Greeks::per_percent`] for display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: dV/dt (time decay per year)
    pub theta: f64,
    /// Vega: dV/dσ (sensitivity to volatility)
    pub vega: f64,
    /// Rho: dV/dr (sensitivity to interest rate)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    pub fn get(&self, kind: GreekKind) -> f64 {
        match kind {
            GreekKind::Delta => self.delta,
            GreekKind::Gamma => self.gamma,
            GreekKind::Theta => self.theta,
            GreekKind::Vega => self.vega,
            GreekKind::Rho => self.rho,
        }
    }

    /// Vega and rho per 1 percentage point move instead of per unit
    pub fn per_percent(&self) -> Self {
        Self {
            vega: self.vega / 100.0,
            rho: self.rho / 100.0,
            ..*self
        }
    }

    pub fn theta_per_day(&self) -> f64 {
        self.theta / 365.0
    }

    /// Mapping keyed by the five Greek names
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        GreekKind::ALL
            .iter()
            .map(|&kind| (kind.name(), self.get(kind)))
            .collect()
    }
}

/// Selector for a single Greek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreekKind {
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
}

impl GreekKind {
    pub const ALL: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Theta,
        GreekKind::Vega,
        GreekKind::Rho,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Theta => "theta",
            GreekKind::Vega => "vega",
            GreekKind::Rho => "rho",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GreekKind::Delta => "Delta",
            GreekKind::Gamma => "Gamma",
            GreekKind::Theta => "Theta",
            GreekKind::Vega => "Vega",
            GreekKind::Rho => "Rho",
        }
    }
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GreekKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        GreekKind::ALL
            .into_iter()
            .find(|kind| kind.name() == needle)
            .ok_or_else(|| PricingError::UnknownGreek(s.to_string()))
    }
}

//! Sensitivity sweeps
//!
//! Re-prices an option across a range of one input while holding the others
//! fixed. Each point is an independent engine call.

use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::core::{GreekKind, OptionParameters, PricingError, PricingResult};
use crate::models::black_scholes;

/// Sweep ranges and resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Number of points per curve
    /// Default: 100
    pub points: usize,

    /// Spot sweep covers spot ± this amount
    /// Default: 50.0
    pub spot_half_width: f64,

    /// Lower floor for the spot sweep
    /// Default: 1.0
    pub min_spot: f64,

    /// Volatility sweep range (decimal)
    /// Default: 0.05 ..= 1.0
    pub vol_min: f64,
    pub vol_max: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            points: 100,
            spot_half_width: 50.0,
            min_spot: 1.0,
            vol_min: 0.05,
            vol_max: 1.0,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> PricingResult<()> {
        if self.points < 2 {
            return Err(PricingError::domain(
                "points",
                self.points as f64,
                "need at least two points",
            ));
        }
        if !(self.min_spot > 0.0) {
            return Err(PricingError::domain("min_spot", self.min_spot, "must be positive"));
        }
        if !(self.spot_half_width >= 0.0) {
            return Err(PricingError::domain(
                "spot_half_width",
                self.spot_half_width,
                "must be non-negative",
            ));
        }
        if !(self.vol_min > 0.0) {
            return Err(PricingError::domain("vol_min", self.vol_min, "must be positive"));
        }
        if !(self.vol_max > self.vol_min) {
            return Err(PricingError::domain("vol_max", self.vol_max, "must exceed vol_min"));
        }
        Ok(())
    }

    /// Spot values centred on the given spot, floored at `min_spot`
    pub fn spot_grid(&self, spot: f64) -> Array1<f64> {
        let low = (spot - self.spot_half_width).max(self.min_spot);
        linspace(low, spot + self.spot_half_width, self.points)
    }

    pub fn vol_grid(&self) -> Array1<f64> {
        linspace(self.vol_min, self.vol_max, self.points)
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    Array1::linspace(start, end, n)
}

/// One chart's worth of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCurve {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Current value of the swept input, in x-axis units
    pub marker: f64,
    pub points: Vec<[f64; 2]>,
}

impl SensitivityCurve {
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[0])
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[1])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn sweep<F>(xs: &Array1<f64>, mut f: F) -> PricingResult<Vec<[f64; 2]>>
where
    F: FnMut(f64) -> PricingResult<f64>,
{
    xs.iter().map(|&x| Ok([x, f(x)?])).collect()
}

/// Option price against spot
pub fn price_vs_spot(
    params: &OptionParameters,
    config: &SweepConfig,
) -> PricingResult<SensitivityCurve> {
    config.validate()?;
    let points = sweep(&config.spot_grid(params.spot), |s| {
        black_scholes::price(&params.with_spot(s))
    })?;

    Ok(SensitivityCurve {
        title: "Option Price vs Stock Price".to_string(),
        x_label: "Stock Price ($)".to_string(),
        y_label: "Option Price ($)".to_string(),
        marker: params.spot,
        points,
    })
}

/// Option price against volatility, x axis in percent
pub fn price_vs_vol(
    params: &OptionParameters,
    config: &SweepConfig,
) -> PricingResult<SensitivityCurve> {
    config.validate()?;
    let points = sweep(&config.vol_grid(), |v| {
        black_scholes::price(&params.with_vol(v))
    })?
    .into_iter()
    .map(|[v, y]| [v * 100.0, y])
    .collect();

    Ok(SensitivityCurve {
        title: "Option Price vs Volatility".to_string(),
        x_label: "Volatility (%)".to_string(),
        y_label: "Option Price ($)".to_string(),
        marker: params.vol * 100.0,
        points,
    })
}

/// A single Greek against spot, in raw model units
pub fn greek_vs_spot(
    params: &OptionParameters,
    kind: GreekKind,
    config: &SweepConfig,
) -> PricingResult<SensitivityCurve> {
    config.validate()?;
    let points = sweep(&config.spot_grid(params.spot), |s| {
        black_scholes::greeks(&params.with_spot(s)).map(|g| g.get(kind))
    })?;

    Ok(SensitivityCurve {
        title: format!("{} vs Stock Price", kind.label()),
        x_label: "Stock Price ($)".to_string(),
        y_label: kind.label().to_string(),
        marker: params.spot,
        points,
    })
}

/// Which curve to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepTarget {
    /// Price against spot
    Spot,
    /// Price against volatility
    Vol,
    /// A Greek against spot
    Greek(GreekKind),
}

impl SweepTarget {
    pub fn curve(
        &self,
        params: &OptionParameters,
        config: &SweepConfig,
    ) -> PricingResult<SensitivityCurve> {
        match *self {
            SweepTarget::Spot => price_vs_spot(params, config),
            SweepTarget::Vol => price_vs_vol(params, config),
            SweepTarget::Greek(kind) => greek_vs_spot(params, kind, config),
        }
    }
}

impl FromStr for SweepTarget {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spot" => Ok(SweepTarget::Spot),
            "vol" => Ok(SweepTarget::Vol),
            other => other
                .parse::<GreekKind>()
                .map(SweepTarget::Greek)
                .map_err(|_| PricingError::UnknownSweepTarget(s.to_string())),
        }
    }
}

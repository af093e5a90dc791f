//! Calculator configuration
//!
//! Default inputs, input bounds for front ends and sweep settings. Loaded
//! from JSON; any section or field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::SweepConfig;
use crate::core::{OptionParameters, PricingError, PricingResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Inputs shown when a front end starts
    pub defaults: OptionParameters,
    /// Accepted input ranges
    pub bounds: InputBounds,
    /// Chart sweep settings
    pub sweep: SweepConfig,
}

impl CalculatorConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> PricingResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| PricingError::config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_json(json: &str) -> PricingResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PricingError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PricingResult<()> {
        self.bounds.validate()?;
        self.defaults.validate()?;
        self.sweep.validate()
    }
}

/// Inclusive input ranges, one pair per parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    pub spot: (f64, f64),
    pub strike: (f64, f64),
    /// Years
    pub time: (f64, f64),
    /// Decimal rate
    pub rate: (f64, f64),
    /// Decimal vol
    pub vol: (f64, f64),
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            spot: (1.0, 10_000.0),
            strike: (1.0, 10_000.0),
            time: (0.1, 30.0),
            rate: (0.0, 0.5),
            vol: (0.01, 5.0),
        }
    }
}

impl InputBounds {
    pub fn validate(&self) -> PricingResult<()> {
        for (name, (lo, hi)) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time", self.time),
            ("rate", self.rate),
            ("vol", self.vol),
        ] {
            if !(lo <= hi) {
                return Err(PricingError::config(format!(
                    "{} bounds are inverted: [{}, {}]",
                    name, lo, hi
                )));
            }
        }
        // Lower bounds on the positive inputs must keep the closed form defined
        for (name, lo) in [
            ("spot", self.spot.0),
            ("strike", self.strike.0),
            ("time", self.time.0),
            ("vol", self.vol.0),
        ] {
            if !(lo > 0.0) {
                return Err(PricingError::config(format!(
                    "{} lower bound must be positive, got {}",
                    name, lo
                )));
            }
        }
        Ok(())
    }

    /// Pull every input into its range
    pub fn clamp(&self, params: &OptionParameters) -> OptionParameters {
        OptionParameters {
            spot: params.spot.clamp(self.spot.0, self.spot.1),
            strike: params.strike.clamp(self.strike.0, self.strike.1),
            time: params.time.clamp(self.time.0, self.time.1),
            rate: params.rate.clamp(self.rate.0, self.rate.1),
            vol: params.vol.clamp(self.vol.0, self.vol.1),
            option_type: params.option_type,
        }
    }
}

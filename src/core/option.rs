//! Option contract definitions
//!
//! Represents European options and the market inputs needed to price them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PricingError, PricingResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid_option_type(s)),
        }
    }
}

/// Market and contract inputs for a single Black-Scholes evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time: f64,
    /// Annualized risk-free rate (0.05 = 5%)
    pub rate: f64,
    /// Annualized volatility (0.20 = 20%)
    pub vol: f64,
    pub option_type: OptionType,
}

impl Default for OptionParameters {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time: 1.0,
            rate: 0.05,
            vol: 0.20,
            option_type: OptionType::Call,
        }
    }
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time,
            rate,
            vol,
            option_type,
        }
    }

    /// Check the inputs are inside the domain of the closed form.
    ///
    /// Spot, strike, time and vol must be finite and strictly positive.
    /// The rate may be negative, but exp(-rT) and the discounted strike
    /// must stay finite and non-zero.
    pub fn validate(&self) -> PricingResult<()> {
        positive("spot", self.spot)?;
        positive("strike", self.strike)?;
        positive("time", self.time)?;
        positive("vol", self.vol)?;
        if !self.rate.is_finite() {
            return Err(PricingError::domain("rate", self.rate, "must be finite"));
        }
        let df = self.discount_factor();
        if !(df.is_finite() && df > 0.0) || !(self.strike * df).is_finite() {
            return Err(PricingError::domain(
                "rate",
                self.rate,
                "discount factor over this horizon is out of range",
            ));
        }
        Ok(())
    }

    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    pub fn with_time(self, time: f64) -> Self {
        Self { time, ..self }
    }

    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    pub fn with_vol(self, vol: f64) -> Self {
        Self { vol, ..self }
    }

    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Discount factor exp(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time).exp()
    }

    /// Call minus put value implied by put-call parity: S - K*exp(-rT)
    pub fn parity_value(&self) -> f64 {
        self.spot - self.strike * self.discount_factor()
    }
}

fn positive(param: &'static str, value: f64) -> PricingResult<()> {
    if !value.is_finite() {
        return Err(PricingError::domain(param, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::domain(param, value, "must be positive"));
    }
    Ok(())
}

/// A dated European contract, priced by turning the expiry into a year fraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionContract {
    pub strike: f64,
    pub expiry: NaiveDate,
    pub option_type: OptionType,
}

impl OptionContract {
    pub fn european(strike: f64, expiry: NaiveDate, option_type: OptionType) -> Self {
        Self {
            strike,
            expiry,
            option_type,
        }
    }

    /// Time to expiry in years from given date
    pub fn time_to_expiry(&self, from: NaiveDate) -> f64 {
        let days = (self.expiry - from).num_days();
        days as f64 / 365.25
    }

    /// Build validated pricing inputs as of the given date
    pub fn parameters(
        &self,
        spot: f64,
        rate: f64,
        vol: f64,
        as_of: NaiveDate,
    ) -> PricingResult<OptionParameters> {
        let params = OptionParameters::new(
            spot,
            self.strike,
            self.time_to_expiry(as_of),
            rate,
            vol,
            self.option_type,
        );
        params.validate()?;
        Ok(params)
    }
}

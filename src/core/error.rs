//! Error types for the pricing engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid option type '{0}': choose 'call' or 'put'")]
    InvalidOptionType(String),

    #[error("Invalid {param} = {value}: {reason}")]
    Domain {
        param: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unknown Greek '{0}': choose delta, gamma, theta, vega or rho")]
    UnknownGreek(String),

    #[error("Unknown sweep target '{0}': choose spot, vol, delta, gamma, theta, vega or rho")]
    UnknownSweepTarget(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_option_type(input: impl Into<String>) -> Self {
        Self::InvalidOptionType(input.into())
    }

    pub fn domain(param: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Domain { param, value, reason }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Name of the offending parameter, if this is a domain error
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::Domain { param, .. } => Some(param),
            _ => None,
        }
    }
}

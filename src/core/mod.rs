//! Core data types for the Black-Scholes calculator
//!
//! Defines fundamental types:
//! - OptionParameters: spot, strike, expiry, rate, vol, type (call/put)
//! - OptionContract: dated contract that resolves to parameters
//! - Greeks: price sensitivities
//! - PricingError: error taxonomy

pub mod option;
pub mod greeks;
pub mod error;

pub use option::*;
pub use greeks::*;
pub use error::*;

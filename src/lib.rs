//! # BS Calculator - Black-Scholes European Option Pricing
//!
//! Closed-form price and first order Greeks for European calls and puts,
//! with the sensitivity sweeps that drive the charting front ends.
//!
//! ## Key Components
//!
//! - **Core**: option parameters, contracts, Greeks, errors
//! - **Black-Scholes**: price, Greeks and a combined valuation
//! - **Analysis**: price vs spot, price vs vol, Greek vs spot sweeps
//! - **Config**: default inputs, input bounds and sweep settings
//!
//! ## Usage
//!
//! ```rust
//! use bs_calculator::prelude::*;
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call);
//! let call_price = bs_price(&params).unwrap();
//! let greeks = bs_greeks(&params).unwrap();
//! assert!(call_price > 10.0 && greeks.delta > 0.5);
//!
//! // Option type as text, as collected by a form
//! let put_price = black_scholes(100.0, 100.0, 1.0, 0.05, 0.20, "put").unwrap();
//! assert!(put_price < call_price);
//! ```
//!
//! ## Conventions
//!
//! - Rates and vols are decimals (0.05 = 5%)
//! - Theta is per year
//! - Vega and rho are per unit move; `Greeks::per_percent` rescales them
//!   to a 1 percentage point move
//!
//! ## What This Crate Does NOT Do
//!
//! - Price American options
//! - Solve for implied volatility
//! - Calibrate to market data

pub mod analysis;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        GreekKind, Greeks, OptionContract, OptionParameters, OptionType, PricingError,
        PricingResult,
    };

    // Models
    pub use crate::models::{
        black_scholes,
        calculate_greeks,
        evaluate,
        greeks as bs_greeks,
        norm_cdf,
        norm_pdf,
        price as bs_price,
        Valuation,
    };

    // Analysis
    pub use crate::analysis::{
        greek_vs_spot, price_vs_spot, price_vs_vol, SensitivityCurve, SweepConfig, SweepTarget,
    };

    // Config
    pub use crate::config::{CalculatorConfig, InputBounds};
}

// Re-export main types at crate root
pub use crate::core::{PricingError, PricingResult};
pub use crate::models::{black_scholes, calculate_greeks};

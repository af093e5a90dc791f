//! Sensitivity analysis built on repeated engine calls
//!
//! Feeds the three charts: price vs spot, price vs volatility and a
//! selected Greek vs spot.

pub mod sweep;

pub use sweep::*;

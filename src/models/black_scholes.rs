//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks computation
//! - String-typed entry points for front ends that collect the option type as text
//!
//! Every entry point validates its inputs first; the closed form is only
//! evaluated for strictly positive spot, strike, time and vol.

use std::f64::consts::{PI, SQRT_2};

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;

use crate::core::{Greeks, OptionParameters, OptionType, PricingResult};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Intermediate quantities shared by price and Greeks
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    df: f64,
}

impl Terms {
    fn new(p: &OptionParameters) -> Self {
        let sqrt_t = p.time.sqrt();
        let d1 = d1(p.spot, p.strike, p.time, p.rate, p.vol);
        Self {
            d1,
            d2: d1 - p.vol * sqrt_t,
            sqrt_t,
            df: p.discount_factor(),
        }
    }

    fn price(&self, p: &OptionParameters) -> f64 {
        let value = match p.option_type {
            OptionType::Call => p.spot * norm_cdf(self.d1) - p.strike * self.df * norm_cdf(self.d2),
            OptionType::Put => p.strike * self.df * norm_cdf(-self.d2) - p.spot * norm_cdf(-self.d1),
        };
        // Cancellation deep out of the money can leave -1e-17 style residue
        if value < 0.0 {
            0.0
        } else {
            value
        }
    }

    fn greeks(&self, p: &OptionParameters) -> Greeks {
        let pdf_d1 = norm_pdf(self.d1);
        let cdf_d1 = norm_cdf(self.d1);

        let delta = match p.option_type {
            OptionType::Call => cdf_d1,
            OptionType::Put => cdf_d1 - 1.0,
        };

        // Gamma and vega are the same for call and put
        let gamma = pdf_d1 / (p.spot * p.vol * self.sqrt_t);
        let vega = p.spot * self.sqrt_t * pdf_d1;

        let term1 = -(p.spot * p.vol * pdf_d1) / (2.0 * self.sqrt_t);
        let theta = match p.option_type {
            OptionType::Call => term1 - p.rate * p.strike * self.df * norm_cdf(self.d2),
            OptionType::Put => term1 + p.rate * p.strike * self.df * norm_cdf(-self.d2),
        };

        let rho = match p.option_type {
            OptionType::Call => p.strike * p.time * self.df * norm_cdf(self.d2),
            OptionType::Put => -p.strike * p.time * self.df * norm_cdf(-self.d2),
        };

        Greeks::new(delta, gamma, theta, vega, rho)
    }
}

/// Price and Greeks from one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub params: OptionParameters,
    pub price: f64,
    pub greeks: Greeks,
}

/// Black-Scholes European option price
pub fn price(params: &OptionParameters) -> PricingResult<f64> {
    params.validate()?;
    Ok(Terms::new(params).price(params))
}

/// Black-Scholes Greeks (theta per year, vega and rho per unit)
pub fn greeks(params: &OptionParameters) -> PricingResult<Greeks> {
    params.validate()?;
    Ok(Terms::new(params).greeks(params))
}

/// Price and Greeks sharing a single d1/d2 computation
pub fn evaluate(params: &OptionParameters) -> PricingResult<Valuation> {
    params.validate()?;
    let terms = Terms::new(params);
    let valuation = Valuation {
        params: *params,
        price: terms.price(params),
        greeks: terms.greeks(params),
    };
    tracing::debug!(
        option_type = %params.option_type,
        spot = params.spot,
        strike = params.strike,
        d1 = terms.d1,
        d2 = terms.d2,
        price = valuation.price,
        "evaluated option"
    );
    Ok(valuation)
}

fn parse_inputs(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: &str,
) -> PricingResult<OptionParameters> {
    let option_type = option_type.parse::<OptionType>()?;
    let params = OptionParameters::new(spot, strike, time, rate, vol, option_type);
    if let Err(e) = params.validate() {
        tracing::warn!("Rejected pricing inputs: {}", e);
        return Err(e);
    }
    Ok(params)
}

/// Price from loose inputs, with the option type given as `"call"` or `"put"`
pub fn black_scholes(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: &str,
) -> PricingResult<f64> {
    let params = parse_inputs(spot, strike, time, rate, vol, option_type)?;
    price(&params)
}

/// Greeks from loose inputs, with the option type given as `"call"` or `"put"`
pub fn calculate_greeks(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: &str,
) -> PricingResult<Greeks> {
    let params = parse_inputs(spot, strike, time, rate, vol, option_type)?;
    greeks(&params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PricingError;
    use approx::assert_relative_eq;

    fn call(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> OptionParameters {
        OptionParameters::new(spot, strike, time, rate, vol, OptionType::Call)
    }

    fn sample_grid() -> Vec<OptionParameters> {
        let mut out = Vec::new();
        for &spot in &[20.0, 80.0, 100.0, 125.0, 400.0] {
            for &strike in &[50.0, 100.0, 150.0] {
                for &time in &[0.05, 0.5, 2.0] {
                    for &rate in &[-0.01, 0.0, 0.05, 0.12] {
                        for &vol in &[0.05, 0.2, 0.8] {
                            out.push(call(spot, strike, time, rate, vol));
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.96) - 0.975002104851780).abs() < 1e-12);
        assert!((norm_cdf(-1.96) - 0.024997895148220).abs() < 1e-12);
        assert!((norm_cdf(-8.0) - 6.220960574271785e-16).abs() < 1e-22);
    }

    #[test]
    fn test_norm_pdf_is_derivative_of_cdf() {
        let h = 1e-5;
        for &x in &[-3.0, -1.0, -0.2, 0.0, 0.7, 2.5] {
            let numeric = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert!((numeric - norm_pdf(x)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bs_price() {
        // ATM call, 20% vol, 1 year, 5% rate
        let p = call(100.0, 100.0, 1.0, 0.05, 0.20);
        let call_price = price(&p).unwrap();
        assert!((call_price - 10.4506).abs() < 1e-4);

        let put_price = price(&p.with_option_type(OptionType::Put)).unwrap();
        assert!((put_price - 5.5735).abs() < 1e-4);
    }

    #[test]
    fn test_atm_zero_rate_reference() {
        let p = call(100.0, 100.0, 1.0, 0.0, 0.2);
        let g = greeks(&p).unwrap();

        assert!((price(&p).unwrap() - 7.9656).abs() < 1e-4);
        assert!((g.delta - 0.5398).abs() < 1e-4);
        // d1 = 0.1 at zero rate
        assert!((g.gamma - norm_pdf(0.1) / 20.0).abs() < 1e-12);
        assert!((g.gamma - 0.019848).abs() < 1e-6);
        assert!((g.vega - 39.695).abs() < 1e-3);
    }

    #[test]
    fn test_atm_five_percent_reference() {
        let g = greeks(&call(100.0, 100.0, 1.0, 0.05, 0.2)).unwrap();

        assert!((g.delta - 0.6368).abs() < 1e-4);
        assert!((g.gamma - 0.01876).abs() < 1e-5);
        assert!((g.vega - 37.52).abs() < 1e-2);
        assert!((g.theta - (-6.414)).abs() < 1e-3);
        assert!((g.rho - 53.232).abs() < 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        for p in sample_grid() {
            let c = price(&p).unwrap();
            let put = price(&p.with_option_type(OptionType::Put)).unwrap();
            let parity = p.parity_value();
            assert!(
                (c - put - parity).abs() <= 1e-9 * p.spot.max(p.strike),
                "parity broken for {:?}",
                p
            );
        }
    }

    #[test]
    fn test_delta_bounds() {
        for p in sample_grid() {
            let dc = greeks(&p).unwrap().delta;
            let dp = greeks(&p.with_option_type(OptionType::Put)).unwrap().delta;
            assert!((0.0..=1.0).contains(&dc));
            assert!((-1.0..=0.0).contains(&dp));
        }
    }

    #[test]
    fn test_gamma_vega_positive_and_type_invariant() {
        // n(d1) underflows to exactly zero far from the money
        let in_range = |p: &OptionParameters| d1(p.spot, p.strike, p.time, p.rate, p.vol).abs() < 8.0;
        for p in sample_grid().into_iter().filter(in_range) {
            let gc = greeks(&p).unwrap();
            let gp = greeks(&p.with_option_type(OptionType::Put)).unwrap();
            assert!(gc.gamma > 0.0 && gp.gamma > 0.0);
            assert!(gc.vega > 0.0 && gp.vega > 0.0);
            assert_eq!(gc.gamma, gp.gamma);
            assert_eq!(gc.vega, gp.vega);
        }
    }

    #[test]
    fn test_deep_in_the_money_call() {
        let p = call(100_000.0, 100.0, 1.0, 0.05, 0.2);
        let g = greeks(&p).unwrap();

        assert_relative_eq!(price(&p).unwrap(), p.parity_value(), max_relative = 1e-12);
        assert_relative_eq!(g.delta, 1.0, epsilon = 1e-12);
        assert!(g.gamma.abs() < 1e-12);
    }

    #[test]
    fn test_deep_out_of_the_money_call() {
        let p = call(0.01, 100.0, 1.0, 0.05, 0.2);
        let g = greeks(&p).unwrap();

        assert!(price(&p).unwrap() < 1e-12);
        assert!(g.delta < 1e-12);
    }

    #[test]
    fn test_price_never_negative() {
        for p in sample_grid() {
            assert!(price(&p).unwrap() >= 0.0);
            assert!(price(&p.with_option_type(OptionType::Put)).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_greeks_match_finite_differences() {
        for ty in [OptionType::Call, OptionType::Put] {
            let p = OptionParameters::new(105.0, 100.0, 0.75, 0.03, 0.25, ty);
            let g = greeks(&p).unwrap();
            let v = |q: OptionParameters| price(&q).unwrap();

            let hs = 1e-3;
            let delta = (v(p.with_spot(p.spot + hs)) - v(p.with_spot(p.spot - hs))) / (2.0 * hs);
            let gamma = (v(p.with_spot(p.spot + hs)) - 2.0 * v(p) + v(p.with_spot(p.spot - hs)))
                / (hs * hs);

            let hv = 1e-5;
            let vega = (v(p.with_vol(p.vol + hv)) - v(p.with_vol(p.vol - hv))) / (2.0 * hv);
            let rho = (v(p.with_rate(p.rate + hv)) - v(p.with_rate(p.rate - hv))) / (2.0 * hv);
            // Theta is dV/dt in calendar time, i.e. minus the derivative in expiry
            let theta = -(v(p.with_time(p.time + hv)) - v(p.with_time(p.time - hv))) / (2.0 * hv);

            assert_relative_eq!(g.delta, delta, max_relative = 1e-6);
            assert_relative_eq!(g.gamma, gamma, max_relative = 1e-4);
            assert_relative_eq!(g.vega, vega, max_relative = 1e-6);
            assert_relative_eq!(g.rho, rho, max_relative = 1e-6);
            assert_relative_eq!(g.theta, theta, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_evaluate_matches_separate_calls() {
        let p = OptionParameters::default().with_option_type(OptionType::Put);
        let v = evaluate(&p).unwrap();

        assert_eq!(v.price, price(&p).unwrap());
        assert_eq!(v.greeks, greeks(&p).unwrap());
        assert_eq!(v.params, p);
    }

    #[test]
    fn test_string_entry_points() {
        let c = black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "call").unwrap();
        let p = black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "put").unwrap();
        assert!((c - p - (100.0 - 100.0 * (-0.05f64).exp())).abs() < 1e-10);

        let g = calculate_greeks(100.0, 100.0, 1.0, 0.05, 0.2, "put").unwrap();
        assert!((g.delta - (0.6368 - 1.0)).abs() < 1e-4);
        assert!(g.rho < 0.0);
    }

    #[test]
    fn test_invalid_type_rejected() {
        let err = black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "straddle").unwrap_err();
        assert_eq!(err, PricingError::InvalidOptionType("straddle".to_string()));

        let err = calculate_greeks(100.0, 100.0, 1.0, 0.05, 0.2, "straddle").unwrap_err();
        assert!(matches!(err, PricingError::InvalidOptionType(_)));
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let err = black_scholes(100.0, 100.0, 0.0, 0.05, 0.2, "call").unwrap_err();
        assert_eq!(err.param(), Some("time"));

        let err = black_scholes(100.0, 100.0, 1.0, 0.05, 0.0, "call").unwrap_err();
        assert_eq!(err.param(), Some("vol"));

        let err = calculate_greeks(0.0, 100.0, 1.0, 0.05, 0.2, "call").unwrap_err();
        assert_eq!(err.param(), Some("spot"));

        let err = greeks(&OptionParameters::default().with_strike(-1.0)).unwrap_err();
        assert_eq!(err.param(), Some("strike"));
    }

    #[test]
    fn test_overflowing_discount_rejected() {
        let p = call(100.0, 100.0, 1.0, -1e308, 0.2);

        let err = price(&p).unwrap_err();
        assert_eq!(err.param(), Some("rate"));
        let err = greeks(&p).unwrap_err();
        assert_eq!(err.param(), Some("rate"));
        let err = black_scholes(100.0, 100.0, 1.0, -1e308, 0.2, "put").unwrap_err();
        assert_eq!(err.param(), Some("rate"));
    }

    #[test]
    fn test_results_finite_for_accepted_inputs() {
        for &rate in &[-5.0, -0.5, 0.0, 0.5, 5.0] {
            for ty in [OptionType::Call, OptionType::Put] {
                let p = OptionParameters::new(100.0, 100.0, 2.0, rate, 0.3, ty);
                let v = evaluate(&p).unwrap();
                assert!(v.price.is_finite() && v.price >= 0.0);
                for value in v.greeks.to_map().values() {
                    assert!(value.is_finite(), "non-finite Greek for {:?}", p);
                }
            }
        }
    }

    #[test]
    fn test_type_checked_before_domain() {
        let err = black_scholes(100.0, 100.0, 0.0, 0.05, 0.0, "straddle").unwrap_err();
        assert!(matches!(err, PricingError::InvalidOptionType(_)));
    }
}

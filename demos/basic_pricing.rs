//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use bs_calculator::prelude::*;

fn main() -> PricingResult<()> {
    // Option parameters
    let params = OptionParameters::new(
        100.0, // spot
        105.0, // strike
        0.25,  // 3 months
        0.05,  // 5% risk-free rate
        0.20,  // 20% volatility
        OptionType::Call,
    );

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", params.spot);
    println!("Strike:   ${:.2}", params.strike);
    println!("Time:     {:.2} years ({:.0} days)", params.time, params.time * 365.0);
    println!("Rate:     {:.1}%", params.rate * 100.0);
    println!("Vol:      {:.1}%\n", params.vol * 100.0);

    let call_price = bs_price(&params)?;
    println!("Call Price: ${:.4}", call_price);

    let put_price = bs_price(&params.with_option_type(OptionType::Put))?;
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", call_price - put_price);
    println!("  S - K*e^(-rT) = {:.4}", params.parity_value());
    println!(
        "  Difference: {:.2e}",
        (call_price - put_price - params.parity_value()).abs()
    );

    println!("\n=== Greeks (Call) ===\n");
    let greeks = bs_greeks(&params)?;
    let pct = greeks.per_percent();
    println!("Delta:  {:.4}", greeks.delta);
    println!("Gamma:  {:.4}", greeks.gamma);
    println!("Theta:  {:.4} (per day: {:.4})", greeks.theta, greeks.theta_per_day());
    println!("Vega:   {:.4} (per 1% vol: {:.4})", greeks.vega, pct.vega);
    println!("Rho:    {:.4} (per 1% rate: {:.4})", greeks.rho, pct.rho);

    // Loose inputs, as a form would hand them over
    println!("\n=== Input Errors ===\n");
    match black_scholes(100.0, 100.0, 1.0, 0.05, 0.2, "straddle") {
        Ok(price) => println!("Unexpected price {:.4}", price),
        Err(e) => println!("{}", e),
    }
    match black_scholes(100.0, 100.0, 1.0, 0.05, 0.0, "call") {
        Ok(price) => println!("Unexpected price {:.4}", price),
        Err(e) => println!("{}", e),
    }

    println!("\n=== Price vs Volatility ===\n");
    let sweep = SweepConfig {
        points: 5,
        ..Default::default()
    };
    let curve = price_vs_vol(&params, &sweep)?;
    for [vol, price] in curve.points {
        println!("  {:>6.2}%  ${:.4}", vol, price);
    }

    Ok(())
}

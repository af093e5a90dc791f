//! Black-Scholes Calculator CLI
//!
//! Prices a European option and prints its Greeks, optionally with one of
//! the sensitivity curves.
//!
//! Usage:
//!   cargo run --bin bs_cli -- --spot 100 --strike 105 --time 0.5 --rate 5 --vol 20 --type put
//!   cargo run --bin bs_cli -- --expiry 2027-06-18 --sweep vega --json

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;

use bs_calculator::analysis::SensitivityCurve;
use bs_calculator::logging;
use bs_calculator::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "bs_cli")]
#[command(about = "Black-Scholes European option price and Greeks")]
struct Args {
    /// Current stock price
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Time to expiration in years (e.g. 0.5 for 6 months)
    #[arg(long, conflicts_with = "expiry")]
    time: Option<f64>,

    /// Expiry date (YYYY-MM-DD), converted to years from today
    #[arg(long)]
    expiry: Option<NaiveDate>,

    /// Risk-free rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Volatility in percent
    #[arg(long)]
    vol: Option<f64>,

    /// Option type: call or put
    #[arg(long = "type")]
    option_type: Option<String>,

    /// JSON config with defaults, bounds and sweep settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a curve: spot, vol, or a Greek name (delta, gamma, theta, vega, rho)
    #[arg(long)]
    sweep: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    valuation: Valuation,
    /// Vega and rho per 1 percentage point
    greeks_per_percent: Greeks,
    #[serde(skip_serializing_if = "Option::is_none")]
    sweep: Option<SensitivityCurve>,
}

fn build_params(args: &Args, defaults: &OptionParameters) -> PricingResult<OptionParameters> {
    let option_type = match &args.option_type {
        Some(text) => text.parse::<OptionType>()?,
        None => defaults.option_type,
    };
    let spot = args.spot.unwrap_or(defaults.spot);
    let rate = args.rate.map(|r| r / 100.0).unwrap_or(defaults.rate);
    let vol = args.vol.map(|v| v / 100.0).unwrap_or(defaults.vol);
    let strike = args.strike.unwrap_or(defaults.strike);

    if let Some(expiry) = args.expiry {
        let today = chrono::Utc::now().date_naive();
        return OptionContract::european(strike, expiry, option_type)
            .parameters(spot, rate, vol, today);
    }

    let params = OptionParameters::new(
        spot,
        strike,
        args.time.unwrap_or(defaults.time),
        rate,
        vol,
        option_type,
    );
    params.validate()?;
    Ok(params)
}

fn print_text(params: &OptionParameters, valuation: &Valuation, sweep: Option<&SensitivityCurve>) {
    println!("Black-Scholes European Option");
    println!("=============================\n");
    println!("  Spot:   ${:.2}", params.spot);
    println!("  Strike: ${:.2}", params.strike);
    println!("  Time:   {:.4} years ({:.0} days)", params.time, params.time * 365.0);
    println!("  Rate:   {:.2}%", params.rate * 100.0);
    println!("  Vol:    {:.2}%\n", params.vol * 100.0);

    let title = match params.option_type {
        OptionType::Call => "Call",
        OptionType::Put => "Put",
    };
    println!("{} Option Price: ${:.2}\n", title, valuation.price);

    let g = valuation.greeks;
    let pct = g.per_percent();
    println!("Greeks:");
    println!("  Delta: {:.4}", g.delta);
    println!("  Gamma: {:.6}", g.gamma);
    println!("  Theta: ${:.4}/year (${:.4}/day)", g.theta, g.theta_per_day());
    println!("  Vega:  ${:.4} per 1% vol ({:.4} per unit)", pct.vega, g.vega);
    println!("  Rho:   ${:.4} per 1% rate ({:.4} per unit)", pct.rho, g.rho);

    if let Some(curve) = sweep {
        println!("\n{}", curve.title);
        println!("{:>14} {:>14}", curve.x_label, curve.y_label);
        for [x, y] in curve.points.iter().copied() {
            println!("{:>14.4} {:>14.6}", x, y);
        }
    }
}

fn run(args: Args) -> PricingResult<()> {
    let config = match &args.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };

    let params = build_params(&args, &config.defaults)?;
    info!(
        "Pricing {} S={} K={} T={:.4} r={} vol={}",
        params.option_type, params.spot, params.strike, params.time, params.rate, params.vol
    );

    let valuation = evaluate(&params)?;
    let sweep = args
        .sweep
        .as_deref()
        .map(|target| target.parse::<SweepTarget>()?.curve(&params, &config.sweep))
        .transpose()?;

    if args.json {
        let report = Report {
            valuation,
            greeks_per_percent: valuation.greeks.per_percent(),
            sweep,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| PricingError::Serialization(e.to_string()))?;
        println!("{}", json);
    } else {
        print_text(&params, &valuation, sweep.as_ref());
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init(LevelFilter::WARN);

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Black-Scholes Calculator GUI
//!
//! Interactive price, Greeks and sensitivity charts for a European option.
//! Set `BS_CALCULATOR_CONFIG` to a JSON file to override defaults and bounds.

use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, VLine};
use tracing::level_filters::LevelFilter;

use bs_calculator::logging;
use bs_calculator::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    SpotSensitivity,
    VolSensitivity,
    GreeksAnalysis,
}

struct CalculatorApp {
    config: CalculatorConfig,

    // Inputs (rate and vol edited in percent)
    spot: f64,
    strike: f64,
    time: f64,
    rate_pct: f64,
    vol_pct: f64,
    option_type: OptionType,

    // UI state
    tab: Tab,
    selected_greek: GreekKind,
}

impl CalculatorApp {
    fn new(config: CalculatorConfig) -> Self {
        let defaults = config.bounds.clamp(&config.defaults);
        Self {
            spot: defaults.spot,
            strike: defaults.strike,
            time: defaults.time,
            rate_pct: defaults.rate * 100.0,
            vol_pct: defaults.vol * 100.0,
            option_type: defaults.option_type,
            tab: Tab::SpotSensitivity,
            selected_greek: GreekKind::Delta,
            config,
        }
    }

    fn params(&self) -> OptionParameters {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.time,
            self.rate_pct / 100.0,
            self.vol_pct / 100.0,
            self.option_type,
        )
    }

    fn current_curve(&self, params: &OptionParameters) -> PricingResult<SensitivityCurve> {
        let target = match self.tab {
            Tab::SpotSensitivity => SweepTarget::Spot,
            Tab::VolSensitivity => SweepTarget::Vol,
            Tab::GreeksAnalysis => SweepTarget::Greek(self.selected_greek),
        };
        target.curve(params, &self.config.sweep)
    }

    fn inputs_panel(&mut self, ui: &mut egui::Ui) {
        let bounds = self.config.bounds.clone();

        ui.heading("Inputs");
        ui.separator();

        egui::Grid::new("inputs_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Current Stock Price ($)")
                    .on_hover_text("The current market price of the underlying stock");
                ui.add(
                    egui::DragValue::new(&mut self.spot)
                        .speed(1.0)
                        .clamp_range(bounds.spot.0..=bounds.spot.1),
                );
                ui.end_row();

                ui.label("Strike Price ($)")
                    .on_hover_text("The price at which the option can be exercised");
                ui.add(
                    egui::DragValue::new(&mut self.strike)
                        .speed(1.0)
                        .clamp_range(bounds.strike.0..=bounds.strike.1),
                );
                ui.end_row();

                ui.label("Time to Expiration (years)")
                    .on_hover_text("E.g. 0.5 for 6 months");
                ui.add(
                    egui::DragValue::new(&mut self.time)
                        .speed(0.1)
                        .clamp_range(bounds.time.0..=bounds.time.1),
                );
                ui.end_row();

                ui.label("Risk-free Rate (%)")
                    .on_hover_text("Usually a government bond yield of the same maturity");
                ui.add(
                    egui::DragValue::new(&mut self.rate_pct)
                        .speed(0.1)
                        .clamp_range(bounds.rate.0 * 100.0..=bounds.rate.1 * 100.0),
                );
                ui.end_row();

                ui.label("Volatility (%)")
                    .on_hover_text("Standard deviation of annual returns");
                ui.add(
                    egui::DragValue::new(&mut self.vol_pct)
                        .speed(1.0)
                        .clamp_range(bounds.vol.0 * 100.0..=bounds.vol.1 * 100.0),
                );
                ui.end_row();

                ui.label("Option Type");
                egui::ComboBox::from_id_source("option_type")
                    .selected_text(self.option_type.to_string())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.option_type, OptionType::Call, "call");
                        ui.selectable_value(&mut self.option_type, OptionType::Put, "put");
                    });
                ui.end_row();
            });
    }

    fn results(&self, ui: &mut egui::Ui, valuation: &Valuation) {
        let title = match self.option_type {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        };
        ui.heading(format!("{} Option Price: ${:.2}", title, valuation.price));
        ui.separator();

        let g = valuation.greeks;
        let pct = g.per_percent();
        ui.strong("Option Greeks");
        egui::Grid::new("greeks_grid")
            .striped(true)
            .spacing([20.0, 4.0])
            .show(ui, |ui| {
                ui.label("Delta")
                    .on_hover_text("Change in option value for a $1 move in the stock");
                ui.label(format!("{:.4}", g.delta));
                ui.end_row();

                ui.label("Gamma")
                    .on_hover_text("Change in delta for a $1 move in the stock");
                ui.label(format!("{:.6}", g.gamma));
                ui.end_row();

                ui.label("Theta")
                    .on_hover_text("Time decay of the option value per year");
                ui.label(format!("${:.4}/year", g.theta));
                ui.end_row();

                ui.label("Vega")
                    .on_hover_text("Change in option value for a 1% change in volatility");
                ui.label(format!("${:.4}/σ%", pct.vega));
                ui.end_row();

                ui.label("Rho")
                    .on_hover_text("Change in option value for a 1% change in interest rates");
                ui.label(format!("${:.4}/r%", pct.rho));
                ui.end_row();
            });
    }

    fn chart(&mut self, ui: &mut egui::Ui, params: &OptionParameters) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::SpotSensitivity, "Stock Price Sensitivity");
            ui.selectable_value(&mut self.tab, Tab::VolSensitivity, "Volatility Sensitivity");
            ui.selectable_value(&mut self.tab, Tab::GreeksAnalysis, "Greeks Analysis");
        });

        if self.tab == Tab::GreeksAnalysis {
            egui::ComboBox::from_label("Select Greek")
                .selected_text(self.selected_greek.label())
                .show_ui(ui, |ui| {
                    for kind in GreekKind::ALL {
                        ui.selectable_value(&mut self.selected_greek, kind, kind.label());
                    }
                });
        }

        let curve = match self.current_curve(params) {
            Ok(curve) => curve,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, e.to_string());
                return;
            }
        };

        let marker_name = match self.tab {
            Tab::VolSensitivity => "Current Volatility",
            _ => "Current Stock Price",
        };

        ui.label(&curve.title);
        Plot::new("sensitivity")
            .view_aspect(2.0)
            .x_axis_label(curve.x_label.clone())
            .y_axis_label(curve.y_label.clone())
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::new(curve.points.clone()))
                        .name(&curve.y_label)
                        .color(egui::Color32::LIGHT_BLUE)
                        .width(2.0),
                );
                plot_ui.vline(
                    VLine::new(curve.marker)
                        .name(marker_name)
                        .color(egui::Color32::YELLOW)
                        .width(1.5)
                        .style(LineStyle::Dashed { length: 5.0 }),
                );
            });
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs").show(ctx, |ui| {
            self.inputs_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Black-Scholes European Option Price Calculator");
            ui.separator();

            let params = self.params();
            match evaluate(&params) {
                Ok(valuation) => {
                    self.results(ui, &valuation);
                    ui.separator();
                    self.chart(ui, &params);
                }
                Err(e) => {
                    ui.colored_label(egui::Color32::RED, e.to_string());
                }
            }
        });
    }
}

fn load_config() -> CalculatorConfig {
    match std::env::var("BS_CALCULATOR_CONFIG") {
        Ok(path) => match CalculatorConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default config: {}", e);
                CalculatorConfig::default()
            }
        },
        Err(_) => CalculatorConfig::default(),
    }
}

fn main() -> eframe::Result<()> {
    logging::init(LevelFilter::INFO);

    let app = CalculatorApp::new(load_config());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Black-Scholes Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Black-Scholes Calculator",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

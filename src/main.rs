use anyhow::Result;
use pv_array_planner::{config, domain::Electrical, report, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let panels = cfg.panels();
    let limits = cfg.limits();
    info!(
        panels = panels.len(),
        panel_voltage = cfg.panel.voltage,
        panel_current = cfg.panel.current,
        max_voltage = limits.max_voltage.as_volts(),
        max_current = limits.max_current.as_amperes(),
        max_power = limits.max_power.as_watts(),
        "optimizing panel wiring"
    );

    let best = cfg.optimizer().optimize(&panels, &limits);

    match &best {
        Some(opt) => info!(
            num_series = opt.num_series,
            num_parallel = opt.num_parallel,
            method = ?opt.method,
            power_w = opt.total_power().as_watts(),
            loss_w = opt.loss_power.as_watts(),
            "best configuration found"
        ),
        None => warn!("no configuration satisfies the voltage and current limits"),
    }

    println!("{}", report::render(best.as_ref(), cfg.output.format)?);
    Ok(())
}

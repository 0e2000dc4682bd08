//! Rendering of optimizer results for the command line.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::Electrical;
use crate::network::MergeMethod;
use crate::optimizer::Optimized;

pub const NO_SOLUTION: &str = "No valid configuration found within the constraints.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(result: Option<&Optimized>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result),
    }
}

pub fn render_text(result: Option<&Optimized>) -> String {
    let Some(best) = result else {
        return NO_SOLUTION.to_string();
    };

    let mut lines = vec!["Best Configuration Found:".to_string()];
    if let Some(method) = best.method {
        lines.push(format!("Method {method}"));
    }
    lines.push(match best.method {
        Some(MergeMethod::ParallelFirst) => format!(
            "Parallel: {}/group -> Series: {}",
            best.num_parallel, best.num_series
        ),
        _ => format!(
            "Series: {}/group -> Parallel: {}",
            best.num_series, best.num_parallel
        ),
    });
    lines.push(format!("- Total Voltage: {}", best.voltage));
    lines.push(format!("- Total Current: {}", best.current));
    lines.push(format!("- Total Power: {}", best.total_power()));
    lines.push(format!("- Loss Power: {}", best.loss_power));
    lines.join("\n")
}

pub fn render_json(result: Option<&Optimized>) -> anyhow::Result<String> {
    let value = match result {
        None => serde_json::Value::Null,
        Some(best) => {
            let mut value = serde_json::to_value(best)?;
            value["total_power"] = json!(best.total_power().as_watts());
            value
        }
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

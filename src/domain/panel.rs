use serde::{Deserialize, Serialize};

use super::{Current, Electrical, Voltage};
use crate::error::PlanError;

/// A single DC source, or the equivalent source of a merged sub-network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub voltage: Voltage,
    pub current: Current,
}

/// A panel produced by a merge operator. Same shape, different provenance.
pub type MergedPanel = Panel;

/// One first-level merge unit: a consecutive, non-empty run of panels.
pub type PanelGroup<'a> = &'a [Panel];

impl Panel {
    pub fn new(voltage: f64, current: f64) -> Self {
        Self {
            voltage: Voltage::volts(voltage),
            current: Current::amperes(current),
        }
    }

    /// Build a panel from raw input, rejecting negative and non-finite values.
    pub fn checked(voltage: f64, current: f64) -> Result<Self, PlanError> {
        check_quantity("voltage", voltage)?;
        check_quantity("current", current)?;
        Ok(Self::new(voltage, current))
    }

    /// `count` copies of the same panel, the way installations are specified.
    pub fn uniform_array(&self, count: usize) -> Vec<Panel> {
        vec![*self; count]
    }
}

impl Electrical for Panel {
    fn voltage(&self) -> Voltage {
        self.voltage
    }

    fn current(&self) -> Current {
        self.current
    }
}

fn check_quantity(quantity: &'static str, value: f64) -> Result<(), PlanError> {
    if !value.is_finite() {
        return Err(PlanError::NonFiniteQuantity { quantity, value });
    }
    if value < 0.0 {
        return Err(PlanError::NegativeQuantity { quantity, value });
    }
    Ok(())
}

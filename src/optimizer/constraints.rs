use serde::{Deserialize, Serialize};

use crate::domain::{Current, Electrical, Power, Voltage};

/// System limits the wired array has to respect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub max_voltage: Voltage,
    pub max_current: Current,
    /// Target ceiling, only used to report the shortfall. Not a filter.
    pub max_power: Power,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_voltage: Voltage::volts(50.0),
            max_current: Current::amperes(30.0),
            max_power: Power::watts(500.0),
        }
    }
}

impl Limits {
    pub fn new(max_voltage: f64, max_current: f64, max_power: f64) -> Self {
        Self {
            max_voltage: Voltage::volts(max_voltage),
            max_current: Current::amperes(max_current),
            max_power: Power::watts(max_power),
        }
    }

    /// Feasibility: voltage and current at or below their caps.
    pub fn admits(&self, source: &impl Electrical) -> bool {
        source.voltage() <= self.max_voltage && source.current() <= self.max_current
    }

    /// Power still missing to reach `max_power`. Negative when exceeded.
    pub fn shortfall(&self, source: &impl Electrical) -> Power {
        self.max_power - source.total_power()
    }

    /// Validate limits for consistency
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("max_voltage", self.max_voltage.as_volts()),
            ("max_current", self.max_current.as_amperes()),
            ("max_power", self.max_power.as_watts()),
        ];

        for (name, value) in checks {
            if !value.is_finite() {
                return Err(format!("{name} is not finite: {value}"));
            }
            if value <= 0.0 {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Panel;

    #[test]
    fn test_admits_is_inclusive() {
        let limits = Limits::new(36.0, 24.0, 500.0);
        assert!(limits.admits(&Panel::new(36.0, 24.0)));
        assert!(!limits.admits(&Panel::new(36.1, 24.0)));
        assert!(!limits.admits(&Panel::new(36.0, 24.1)));
    }

    #[test]
    fn test_power_is_not_a_filter() {
        let limits = Limits::new(50.0, 30.0, 500.0);
        let over = Panel::new(36.0, 24.0);
        assert!(limits.admits(&over));
        assert_eq!(limits.shortfall(&over), Power::watts(-364.0));
    }

    #[test]
    fn test_validate() {
        assert!(Limits::default().validate().is_ok());
        assert!(Limits::new(0.0, 30.0, 500.0).validate().is_err());
        assert!(Limits::new(50.0, f64::INFINITY, 500.0).validate().is_err());
        assert!(Limits::new(50.0, 30.0, -1.0).validate().is_err());
    }
}

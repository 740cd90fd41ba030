//! [`PowerInterlock`] – battery-level rule driving the power relays.
//!
//! Once per command cycle, before any movement decision, the interpreter
//! passes the rig through [`PowerInterlock::refresh`]. A gauge reading at or
//! below the threshold switches the robot into [`PowerState::Recharging`]:
//! recharge indicator high, cleaning system off, movement refused for that
//! cycle. Any higher reading switches it back to [`PowerState::Mobile`]. The
//! state is not sticky; it follows the live reading and can flip between
//! consecutive commands.

use sweepos_hal::HardwareRig;
use sweepos_types::RobotError;
use tracing::debug;

use crate::state::RobotState;

/// Gauge readings at or below this percentage trigger the recharge interlock.
pub const LOW_BATTERY_PERCENT: u8 = 10;

/// Outcome of a power refresh for one command cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// Battery healthy: cleaning system on, movement permitted.
    Mobile,
    /// Battery at or below the threshold: immobilised while recharging.
    Recharging,
}

impl PowerState {
    /// Classify a gauge reading against `threshold`.
    fn from_percent(percent: u8, threshold: u8) -> Self {
        if percent <= threshold {
            PowerState::Recharging
        } else {
            PowerState::Mobile
        }
    }
}

/// The battery/cleaning interlock rule.
pub struct PowerInterlock {
    /// Inclusive percentage at or below which the robot recharges.
    pub low_battery_percent: u8,
}

impl Default for PowerInterlock {
    fn default() -> Self {
        Self {
            low_battery_percent: LOW_BATTERY_PERCENT,
        }
    }
}

impl PowerInterlock {
    /// Interlock with the standard threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the gauge, drive both power relays to the matching levels, and
    /// record the flags on `state`.
    ///
    /// # Errors
    ///
    /// Propagates [`RobotError::HardwareFault`] from the gauge or relays.
    pub fn refresh(
        &self,
        rig: &mut HardwareRig,
        state: &mut RobotState,
    ) -> Result<PowerState, RobotError> {
        let percent = rig.read_battery_percent()?;
        let power = PowerState::from_percent(percent, self.low_battery_percent);
        let low = power == PowerState::Recharging;

        if state.battery_low() != low {
            debug!(percent, battery_low = low, "power transition");
        }

        match power {
            PowerState::Recharging => {
                rig.set_recharge_indicator(true)?;
                rig.set_cleaning_system(false)?;
            }
            PowerState::Mobile => {
                rig.set_recharge_indicator(false)?;
                rig.set_cleaning_system(true)?;
            }
        }
        state.set_power(low);
        Ok(power)
    }
}

//! In-process simulated drivers for headless tests and the interactive shell.
//!
//! [`SimRig`] builds a [`HardwareRig`] wired to stub drivers that record
//! commands and report values a test (or the REPL operator) controls through
//! the returned [`SimHandles`]. This lets the full stack run without any
//! physical hardware.
//!
//! # Example
//!
//! ```rust
//! use sweepos_hal::sim::SimRig;
//!
//! let (mut rig, handles) = SimRig::new().with_battery_percent(80).build();
//!
//! assert_eq!(rig.read_battery_percent().unwrap(), 80);
//!
//! handles.set_obstacle_present(true);
//! assert!(rig.read_obstacle_present().unwrap());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};

use sweepos_types::{RobotError, TurnDirection};

use crate::motor::DriveMotor;
use crate::relay::Relay;
use crate::rig::HardwareRig;
use crate::sensor::{BatteryGauge, ObstacleSensor};

// ────────────────────────────────────────────────────────────────────────────
// Stub battery gauge
// ────────────────────────────────────────────────────────────────────────────

/// A simulated battery gauge reading from a shared level cell. Always
/// succeeds.
pub struct SimBatteryGauge {
    level: Arc<AtomicU8>,
}

impl BatteryGauge for SimBatteryGauge {
    fn percent(&mut self) -> Result<u8, RobotError> {
        Ok(self.level.load(Ordering::Relaxed))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stub obstacle sensor
// ────────────────────────────────────────────────────────────────────────────

/// A simulated infrared line reading from a shared flag. Always succeeds.
pub struct SimObstacleSensor {
    present: Arc<AtomicBool>,
}

impl ObstacleSensor for SimObstacleSensor {
    fn obstacle_ahead(&mut self) -> Result<bool, RobotError> {
        Ok(self.present.load(Ordering::Relaxed))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stub relay
// ────────────────────────────────────────────────────────────────────────────

/// A simulated relay that records the current line level. Always succeeds.
pub struct SimRelay {
    id: String,
    state: bool,
}

impl SimRelay {
    /// Create a new simulated relay with the given identifier.
    pub fn new(id: impl Into<String>) -> Box<Self> {
        Box::new(Self {
            id: id.into(),
            state: false,
        })
    }
}

impl Relay for SimRelay {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_state(&mut self, on: bool) -> Result<(), RobotError> {
        self.state = on;
        Ok(())
    }

    fn state(&self) -> bool {
        self.state
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stub drive motor
// ────────────────────────────────────────────────────────────────────────────

/// A simulated drive train that counts forward pulses and rotations into
/// shared counters. Always succeeds.
pub struct SimDriveMotor {
    forward_pulses: Arc<AtomicU32>,
    left_turns: Arc<AtomicU32>,
    right_turns: Arc<AtomicU32>,
}

impl DriveMotor for SimDriveMotor {
    fn forward(&mut self) -> Result<(), RobotError> {
        self.forward_pulses.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn rotate(&mut self, direction: TurnDirection) -> Result<(), RobotError> {
        match direction {
            TurnDirection::Left => self.left_turns.fetch_add(1, Ordering::Relaxed),
            TurnDirection::Right => self.right_turns.fetch_add(1, Ordering::Relaxed),
        };
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SimHandles
// ────────────────────────────────────────────────────────────────────────────

/// Control handles returned by [`SimRig::build`]. The rig itself is moved
/// into the interpreter; tests and the REPL use these handles to steer the
/// simulated sensors and observe motor activity from outside.
#[derive(Clone)]
pub struct SimHandles {
    battery_percent: Arc<AtomicU8>,
    obstacle_present: Arc<AtomicBool>,
    forward_pulses: Arc<AtomicU32>,
    left_turns: Arc<AtomicU32>,
    right_turns: Arc<AtomicU32>,
}

impl SimHandles {
    /// Set the level the simulated battery gauge will report.
    pub fn set_battery_percent(&self, percent: u8) {
        self.battery_percent.store(percent, Ordering::Relaxed);
    }

    /// Place or clear the simulated obstacle in front of the robot.
    pub fn set_obstacle_present(&self, present: bool) {
        self.obstacle_present.store(present, Ordering::Relaxed);
    }

    /// Number of forward pulse sequences the wheel motor has run.
    pub fn forward_pulses(&self) -> u32 {
        self.forward_pulses.load(Ordering::Relaxed)
    }

    /// Number of left rotations the rotation motor has run.
    pub fn left_turns(&self) -> u32 {
        self.left_turns.load(Ordering::Relaxed)
    }

    /// Number of right rotations the rotation motor has run.
    pub fn right_turns(&self) -> u32 {
        self.right_turns.load(Ordering::Relaxed)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SimRig builder
// ────────────────────────────────────────────────────────────────────────────

/// Builder that constructs a fully simulated [`HardwareRig`] plus the
/// [`SimHandles`] used to steer it.
pub struct SimRig {
    battery_percent: u8,
    obstacle_present: bool,
}

impl Default for SimRig {
    fn default() -> Self {
        Self {
            battery_percent: 100,
            obstacle_present: false,
        }
    }
}

impl SimRig {
    /// Start a builder with a full battery and a clear path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial battery level the gauge reports.
    pub fn with_battery_percent(mut self, percent: u8) -> Self {
        self.battery_percent = percent;
        self
    }

    /// Start with an obstacle already in front of the robot.
    pub fn with_obstacle(mut self, present: bool) -> Self {
        self.obstacle_present = present;
        self
    }

    /// Consume the builder and return the assembled rig and its handles.
    pub fn build(self) -> (HardwareRig, SimHandles) {
        let handles = SimHandles {
            battery_percent: Arc::new(AtomicU8::new(self.battery_percent)),
            obstacle_present: Arc::new(AtomicBool::new(self.obstacle_present)),
            forward_pulses: Arc::new(AtomicU32::new(0)),
            left_turns: Arc::new(AtomicU32::new(0)),
            right_turns: Arc::new(AtomicU32::new(0)),
        };

        let rig = HardwareRig::new(
            Box::new(SimBatteryGauge {
                level: handles.battery_percent.clone(),
            }),
            Box::new(SimObstacleSensor {
                present: handles.obstacle_present.clone(),
            }),
            SimRelay::new("recharge_led"),
            SimRelay::new("cleaning_system"),
            Box::new(SimDriveMotor {
                forward_pulses: handles.forward_pulses.clone(),
                left_turns: handles.left_turns.clone(),
                right_turns: handles.right_turns.clone(),
            }),
        );

        (rig, handles)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_gauge_follows_handle() {
        let (mut rig, handles) = SimRig::new().with_battery_percent(55).build();
        assert_eq!(rig.read_battery_percent().unwrap(), 55);

        handles.set_battery_percent(9);
        assert_eq!(rig.read_battery_percent().unwrap(), 9);
    }

    #[test]
    fn sim_obstacle_follows_handle() {
        let (mut rig, handles) = SimRig::new().build();
        assert!(!rig.read_obstacle_present().unwrap());

        handles.set_obstacle_present(true);
        assert!(rig.read_obstacle_present().unwrap());

        handles.set_obstacle_present(false);
        assert!(!rig.read_obstacle_present().unwrap());
    }

    #[test]
    fn sim_relays_record_levels() {
        let (mut rig, _handles) = SimRig::new().build();
        rig.set_recharge_indicator(true).unwrap();
        rig.set_cleaning_system(true).unwrap();
        assert!(rig.recharge_indicator_on());
        assert!(rig.cleaning_system_on());
    }

    #[test]
    fn sim_motor_counts_commands() {
        let (mut rig, handles) = SimRig::new().build();
        rig.drive_wheel_forward().unwrap();
        rig.drive_wheel_forward().unwrap();
        rig.rotate(TurnDirection::Left).unwrap();
        rig.rotate(TurnDirection::Right).unwrap();

        assert_eq!(handles.forward_pulses(), 2);
        assert_eq!(handles.left_turns(), 1);
        assert_eq!(handles.right_turns(), 1);
    }

    #[test]
    fn sim_rig_full_stack_no_hardware_required() {
        // A complete simulated boundary can be assembled and exercised
        // without any physical hardware.
        let (mut rig, handles) = SimRig::new()
            .with_battery_percent(80)
            .with_obstacle(true)
            .build();

        assert_eq!(rig.read_battery_percent().unwrap(), 80);
        assert!(rig.read_obstacle_present().unwrap());

        rig.set_recharge_indicator(false).unwrap();
        rig.set_cleaning_system(true).unwrap();
        rig.drive_wheel_forward().unwrap();

        assert_eq!(handles.forward_pulses(), 1);
    }
}

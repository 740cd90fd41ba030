//! [`HardwareRig`] – the assembled hardware boundary.
//!
//! The rig owns exactly one boxed driver per role (battery gauge, obstacle
//! sensor, recharge indicator, cleaning-system switch, drive motor) and
//! exposes the six operations the control core needs: two sensor reads and
//! four actuator writes. It is constructed once at startup and moved into
//! the interpreter, which becomes its sole owner.

use sweepos_types::{RobotError, TurnDirection};
use tracing::trace;

use crate::motor::DriveMotor;
use crate::relay::Relay;
use crate::sensor::{BatteryGauge, ObstacleSensor};

/// Aggregate of every hardware driver the control core talks to.
pub struct HardwareRig {
    battery_gauge: Box<dyn BatteryGauge>,
    obstacle_sensor: Box<dyn ObstacleSensor>,
    recharge_indicator: Box<dyn Relay>,
    cleaning_system: Box<dyn Relay>,
    drive_motor: Box<dyn DriveMotor>,
}

impl HardwareRig {
    /// Assemble a rig from one driver per role.
    pub fn new(
        battery_gauge: Box<dyn BatteryGauge>,
        obstacle_sensor: Box<dyn ObstacleSensor>,
        recharge_indicator: Box<dyn Relay>,
        cleaning_system: Box<dyn Relay>,
        drive_motor: Box<dyn DriveMotor>,
    ) -> Self {
        Self {
            battery_gauge,
            obstacle_sensor,
            recharge_indicator,
            cleaning_system,
            drive_motor,
        }
    }

    /// Read the remaining battery capacity as a percentage in `0..=100`.
    pub fn read_battery_percent(&mut self) -> Result<u8, RobotError> {
        let percent = self.battery_gauge.percent()?;
        trace!(percent, "battery read");
        Ok(percent)
    }

    /// Read the obstacle line. `true` means something is in front of the
    /// robot right now.
    pub fn read_obstacle_present(&mut self) -> Result<bool, RobotError> {
        let present = self.obstacle_sensor.obstacle_ahead()?;
        trace!(present, "obstacle read");
        Ok(present)
    }

    /// Drive the recharge indicator line high or low.
    pub fn set_recharge_indicator(&mut self, on: bool) -> Result<(), RobotError> {
        trace!(relay = self.recharge_indicator.id(), on, "relay write");
        self.recharge_indicator.set_state(on)
    }

    /// Power the cleaning system on or off.
    pub fn set_cleaning_system(&mut self, on: bool) -> Result<(), RobotError> {
        trace!(relay = self.cleaning_system.id(), on, "relay write");
        self.cleaning_system.set_state(on)
    }

    /// Pulse the wheel motor for a one-cell advance.
    pub fn drive_wheel_forward(&mut self) -> Result<(), RobotError> {
        trace!("wheel motor pulse");
        self.drive_motor.forward()
    }

    /// Rotate the robot body 90° toward `direction`.
    pub fn rotate(&mut self, direction: TurnDirection) -> Result<(), RobotError> {
        trace!(%direction, "rotation motor pulse");
        self.drive_motor.rotate(direction)
    }

    /// The level currently driven on the recharge indicator line.
    pub fn recharge_indicator_on(&self) -> bool {
        self.recharge_indicator.state()
    }

    /// Whether the cleaning system is currently powered.
    pub fn cleaning_system_on(&self) -> bool {
        self.cleaning_system.state()
    }
}

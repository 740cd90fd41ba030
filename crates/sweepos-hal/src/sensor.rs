//! Sensor traits for the two input lines the control core reads.
//!
//! Drivers implement these traits and are handed to a
//! [`HardwareRig`][crate::rig::HardwareRig]. The rest of the stack only ever
//! talks to the trait, so a bench IBS or an infrared module can be swapped
//! for a simulated one without touching interpreter logic.

use sweepos_types::RobotError;

/// The intelligent battery sensor (IBS) line.
pub trait BatteryGauge: Send + Sync {
    /// Read the remaining battery capacity as a percentage in `0..=100`.
    ///
    /// Every call re-queries the sensor; the HAL performs no caching.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::HardwareFault`] if the gauge cannot be read.
    fn percent(&mut self) -> Result<u8, RobotError>;
}

/// The infrared obstacle-detection line.
pub trait ObstacleSensor: Send + Sync {
    /// `true` when the sensor currently detects something in front of the
    /// robot. Any non-zero line reading counts as an obstacle.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::HardwareFault`] if the line cannot be read.
    fn obstacle_ahead(&mut self) -> Result<bool, RobotError>;
}

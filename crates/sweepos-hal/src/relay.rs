//! Generic `Relay` trait for discrete on/off output lines (the recharge
//! indicator LED and the cleaning-system power switch).

use sweepos_types::RobotError;

/// A discrete on/off output device.
///
/// Drivers implement this trait and are handed to a
/// [`HardwareRig`][crate::rig::HardwareRig].
pub trait Relay: Send + Sync {
    /// Stable identifier for this relay, e.g. `"recharge_led"` or
    /// `"cleaning_system"`.
    fn id(&self) -> &str;

    /// Drive the line to `on` (`true` = high / energised,
    /// `false` = low / de-energised).
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::HardwareFault`] if the line cannot be driven.
    fn set_state(&mut self, on: bool) -> Result<(), RobotError>;

    /// The level most recently driven onto the line (`true` = high).
    fn state(&self) -> bool;
}

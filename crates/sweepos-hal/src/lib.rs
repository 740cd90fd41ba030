//! `sweepos-hal` – Hardware Abstraction Layer
//!
//! The control core never touches pins, pulse timing, or serial lines; it
//! talks to the traits defined here, so drivers can be swapped without
//! touching interpreter logic.
//!
//! # Modules
//!
//! - [`sensor`] – [`BatteryGauge`][sensor::BatteryGauge] and
//!   [`ObstacleSensor`][sensor::ObstacleSensor]: the two input lines the core
//!   reads (percent capacity remaining, obstacle-ahead flag).
//! - [`relay`] – [`Relay`][relay::Relay]: discrete on/off output lines (the
//!   recharge indicator and the cleaning-system switch).
//! - [`motor`] – [`DriveMotor`][motor::DriveMotor]: the wheel and rotation
//!   motor driver (forward pulse, 90° rotation toward a side).
//! - [`rig`] – [`HardwareRig`][rig::HardwareRig]: aggregate owning one boxed
//!   driver per role; the single capability object injected into the
//!   interpreter.
//! - [`sim`] – simulated drivers and the [`SimRig`][sim::SimRig] builder for
//!   headless tests and the interactive shell.

pub mod motor;
pub mod relay;
pub mod rig;
pub mod sensor;
pub mod sim;

pub use motor::DriveMotor;
pub use relay::Relay;
pub use rig::HardwareRig;
pub use sensor::{BatteryGauge, ObstacleSensor};
pub use sim::{SimHandles, SimRig};

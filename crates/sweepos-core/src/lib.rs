//! `sweepos-core` – Command Interpreter & State Machine
//!
//! The brainstem of the cleaning robot. It does not plan paths; it tracks
//! position and heading on the room grid, enforces the battery/cleaning
//! interlock, and turns command symbols into hardware actions.
//!
//! # Modules
//!
//! - [`state`] – [`RobotState`][state::RobotState]: position, heading,
//!   power flags, and the obstacle display cache, plus status-string
//!   formatting. Navigation starts [`Uninitialized`][state::NavState] and
//!   becomes `Ready` exactly once via `initialize()`.
//! - [`interlock`] – [`PowerInterlock`][interlock::PowerInterlock]: reads
//!   the battery gauge each cycle and drives the recharge indicator and the
//!   cleaning-system switch; a reading at or below the threshold immobilises
//!   the robot for that cycle.
//! - [`interpreter`] – [`CommandInterpreter`][interpreter::CommandInterpreter]:
//!   the single entry point commands pass through before any hardware is
//!   touched. Runs the power refresh, the obstacle gate, the state update,
//!   and the status read in a fixed order.

pub mod interlock;
pub mod interpreter;
pub mod state;

pub use interlock::{LOW_BATTERY_PERCENT, PowerInterlock, PowerState};
pub use interpreter::CommandInterpreter;
pub use state::{NavState, RobotState};

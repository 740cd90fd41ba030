//! [`CommandInterpreter`] – single interception point between the command
//! source and the hardware.
//!
//! Every command symbol passes through [`CommandInterpreter::execute`],
//! which runs a fixed pipeline:
//!
//! 1. **Initialization check** – refuse everything until `initialize()`.
//! 2. **Power refresh** ([`PowerInterlock`]): reads the gauge and drives the
//!    power relays. This happens even for symbols that later prove invalid;
//!    the side effects of the cycle are not rolled back.
//! 3. **Interlock gate** – while recharging, the symbol is not even
//!    inspected; the caller still gets a status read.
//! 4. **Symbol parse** – anything outside `f`/`l`/`r` is rejected.
//! 5. **Obstacle gate** – a forward move with something ahead fails with the
//!    obstacle cell and moves nothing.
//! 6. **Actuate and mutate** – motor first, then the position/heading
//!    update.
//! 7. **Status read** – a fresh obstacle check, then the formatted line.
//!
//! # Example
//!
//! ```
//! use sweepos_core::CommandInterpreter;
//! use sweepos_hal::SimRig;
//!
//! let (rig, _handles) = SimRig::new().build();
//! let mut interpreter = CommandInterpreter::new(rig, 3, 3);
//! interpreter.initialize();
//!
//! assert_eq!(interpreter.execute('f').unwrap(), "(0,1,N)");
//! assert_eq!(interpreter.execute('l').unwrap(), "(0,1,W)");
//! ```

use sweepos_hal::HardwareRig;
use sweepos_types::{Command, RobotError, TurnDirection};
use tracing::{debug, info, warn};

use crate::interlock::{PowerInterlock, PowerState};
use crate::state::RobotState;

/// The state machine turning command symbols into hardware actions and
/// status strings. Owns the [`RobotState`] and the [`HardwareRig`]
/// exclusively; callers running across threads must serialize access
/// externally.
pub struct CommandInterpreter {
    state: RobotState,
    rig: HardwareRig,
    interlock: PowerInterlock,
}

impl CommandInterpreter {
    /// Build an interpreter for a `room_x` × `room_y` grid. The robot
    /// starts uninitialized.
    pub fn new(rig: HardwareRig, room_x: i32, room_y: i32) -> Self {
        Self {
            state: RobotState::new(room_x, room_y),
            rig,
            interlock: PowerInterlock::new(),
        }
    }

    /// Place the robot in the canonical start state `(0,0,N)`.
    pub fn initialize(&mut self) {
        self.state.initialize();
        info!("robot initialized at (0,0,N)");
    }

    /// Execute one command symbol and return the resulting status string.
    ///
    /// # Errors
    ///
    /// - [`RobotError::NotInitialized`] – before `initialize()`.
    /// - [`RobotError::UnrecognizedCommand`] – symbol outside `f`/`l`/`r`
    ///   while mobile; the power refresh for the cycle has already happened.
    ///   While recharging the symbol is never inspected and a status string
    ///   comes back instead.
    /// - [`RobotError::BlockedByObstacle`] – forward move with something
    ///   ahead; no state mutation, no status string. The caller can read
    ///   [`status`][Self::status] separately afterwards.
    /// - [`RobotError::HardwareFault`] – propagated from any driver.
    pub fn execute(&mut self, symbol: char) -> Result<String, RobotError> {
        let (position, heading) = self.state.nav()?;

        let power = self.interlock.refresh(&mut self.rig, &mut self.state)?;

        if power == PowerState::Mobile {
            match Command::try_from(symbol)? {
                Command::Forward => {
                    if self.check_obstacle()? {
                        let blocked = position.step(heading);
                        warn!(%blocked, "forward move blocked by obstacle");
                        return Err(RobotError::BlockedByObstacle {
                            x: blocked.x,
                            y: blocked.y,
                        });
                    }
                    self.rig.drive_wheel_forward()?;
                    self.state.set_nav(position.step(heading), heading);
                }
                Command::TurnLeft => {
                    self.rig.rotate(TurnDirection::Left)?;
                    self.state
                        .set_nav(position, heading.turned(TurnDirection::Left));
                }
                Command::TurnRight => {
                    self.rig.rotate(TurnDirection::Right)?;
                    self.state
                        .set_nav(position, heading.turned(TurnDirection::Right));
                }
            }
            debug!(command = %symbol, "command applied");
        } else {
            debug!(command = %symbol, "recharging; command not applied");
        }

        self.status()
    }

    /// Current status string. Re-queries the obstacle sensor, so the
    /// obstacle suffix always reflects the live line.
    ///
    /// # Errors
    ///
    /// [`RobotError::NotInitialized`] before `initialize()`; hardware
    /// faults from the obstacle line.
    pub fn status(&mut self) -> Result<String, RobotError> {
        self.state.nav()?;
        self.check_obstacle()?;
        self.state.status_line()
    }

    /// Drive both power relays low, leaving the robot electrically quiet.
    /// Used on operator shutdown.
    pub fn safe_stop(&mut self) -> Result<(), RobotError> {
        self.rig.set_recharge_indicator(false)?;
        self.rig.set_cleaning_system(false)?;
        self.state.clear_power();
        info!("safe stop: power relays de-energised");
        Ok(())
    }

    // Fresh sensor read, cached only for status display.
    fn check_obstacle(&mut self) -> Result<bool, RobotError> {
        let present = self.rig.read_obstacle_present()?;
        self.state.obstacle_seen = Some(present);
        Ok(present)
    }

    /// Read access to the robot state for reporting.
    pub fn state(&self) -> &RobotState {
        &self.state
    }

    /// Read access to the hardware rig for reporting.
    pub fn hardware(&self) -> &HardwareRig {
        &self.rig
    }
}

//! [`RobotState`] – the data the interpreter mutates, and nothing else.
//!
//! Navigation state is a sum type: a freshly constructed robot is
//! [`NavState::Uninitialized`] and every position/heading query fails with
//! [`RobotError::NotInitialized`] until `initialize()` runs. There are no
//! sentinel coordinates.

use sweepos_types::{Heading, Position, RobotError};

/// Navigation state: unset until `initialize()`, then a concrete cell and
/// heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Uninitialized,
    Ready { position: Position, heading: Heading },
}

/// Aggregate robot state: navigation, power flags, and the obstacle display
/// cache.
///
/// Invariant: `battery_low` and `cleaning_active` are never simultaneously
/// true. Both are written only through [`set_power`][Self::set_power] (which
/// derives one from the other) and `clear_power` (which drops both).
#[derive(Debug)]
pub struct RobotState {
    /// Declared room width in cells. Recorded for reporting; movement is
    /// never clamped against it.
    room_x: i32,
    /// Declared room depth in cells. Recorded, never enforced.
    room_y: i32,
    pub(crate) nav: NavState,
    battery_low: bool,
    cleaning_active: bool,
    /// Result of the most recent obstacle check, used only by status
    /// formatting. `None` until the first check.
    pub(crate) obstacle_seen: Option<bool>,
}

impl RobotState {
    /// Construct an uninitialized robot for a `room_x` × `room_y` grid.
    pub fn new(room_x: i32, room_y: i32) -> Self {
        Self {
            room_x,
            room_y,
            nav: NavState::Uninitialized,
            battery_low: false,
            cleaning_active: false,
            obstacle_seen: None,
        }
    }

    /// Place the robot in the canonical start state `(0,0,N)` and reset the
    /// power flags and obstacle cache to not-yet-decided.
    pub fn initialize(&mut self) {
        self.nav = NavState::Ready {
            position: Position::new(0, 0),
            heading: Heading::North,
        };
        self.battery_low = false;
        self.cleaning_active = false;
        self.obstacle_seen = None;
    }

    /// Current position and heading.
    ///
    /// # Errors
    ///
    /// [`RobotError::NotInitialized`] before `initialize()` has run.
    pub fn nav(&self) -> Result<(Position, Heading), RobotError> {
        match self.nav {
            NavState::Ready { position, heading } => Ok((position, heading)),
            NavState::Uninitialized => Err(RobotError::NotInitialized),
        }
    }

    pub(crate) fn set_nav(&mut self, position: Position, heading: Heading) {
        self.nav = NavState::Ready { position, heading };
    }

    /// Apply a power reading outcome. `battery_low = true` forces the
    /// cleaning flag off; `false` forces it on.
    pub(crate) fn set_power(&mut self, battery_low: bool) {
        self.battery_low = battery_low;
        self.cleaning_active = !battery_low;
    }

    /// Force both power flags off (safe stop).
    pub(crate) fn clear_power(&mut self) {
        self.battery_low = false;
        self.cleaning_active = false;
    }

    /// True while the robot is immobilised for recharging.
    pub fn battery_low(&self) -> bool {
        self.battery_low
    }

    /// True while the cleaning subsystem is powered.
    pub fn cleaning_active(&self) -> bool {
        self.cleaning_active
    }

    /// Declared room size `(room_x, room_y)`.
    pub fn room(&self) -> (i32, i32) {
        (self.room_x, self.room_y)
    }

    /// Format the status string `(x,y,d)`, appending `(ox,oy)` for the cell
    /// one step ahead when the most recent obstacle check found an obstacle.
    /// No whitespace anywhere.
    ///
    /// # Errors
    ///
    /// [`RobotError::NotInitialized`] before `initialize()` has run.
    pub fn status_line(&self) -> Result<String, RobotError> {
        let (position, heading) = self.nav()?;
        let mut line = format!("({},{},{})", position.x, position.y, heading.as_char());
        if self.obstacle_seen == Some(true) {
            let ahead = position.step(heading);
            line.push_str(&format!("({},{})", ahead.x, ahead.y));
        }
        Ok(line)
    }
}

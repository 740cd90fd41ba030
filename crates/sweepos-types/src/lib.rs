use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// One of the four cardinal directions the robot can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

/// Cyclic turn order. Advancing one step in this array is a left
/// (counter-clockwise) turn; advancing three steps is a right turn.
const TURN_ORDER: [Heading; 4] = [Heading::North, Heading::West, Heading::South, Heading::East];

impl Heading {
    /// Index of this heading within [`TURN_ORDER`].
    fn order_index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::West => 1,
            Heading::South => 2,
            Heading::East => 3,
        }
    }

    /// The heading after a 90° turn toward `direction`.
    pub fn turned(self, direction: TurnDirection) -> Heading {
        let step = match direction {
            TurnDirection::Left => 1,
            TurnDirection::Right => 3,
        };
        TURN_ORDER[(self.order_index() + step) % 4]
    }

    /// Single-character code used in status strings: `N`, `S`, `E`, or `W`.
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::South => 'S',
            Heading::East => 'E',
            Heading::West => 'W',
        }
    }

    /// Unit grid step `(dx, dy)` for a forward move along this heading.
    pub fn unit_step(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The side a rotation command turns toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    Left,
    Right,
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnDirection::Left => write!(f, "left"),
            TurnDirection::Right => write!(f, "right"),
        }
    }
}

/// A cell on the room grid. Coordinates are unconstrained; the declared room
/// size is recorded elsewhere but never clamps movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step along `heading`.
    pub fn step(self, heading: Heading) -> Position {
        let (dx, dy) = heading.unit_step();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A recognised command symbol received from the remote command source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `f` – move forward one cell.
    Forward,
    /// `l` – turn left 90°.
    TurnLeft,
    /// `r` – turn right 90°.
    TurnRight,
}

impl Command {
    /// The wire symbol for this command.
    pub fn symbol(self) -> char {
        match self {
            Command::Forward => 'f',
            Command::TurnLeft => 'l',
            Command::TurnRight => 'r',
        }
    }
}

impl TryFrom<char> for Command {
    type Error = RobotError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'f' => Ok(Command::Forward),
            'l' => Ok(Command::TurnLeft),
            'r' => Ok(Command::TurnRight),
            other => Err(RobotError::UnrecognizedCommand(other)),
        }
    }
}

/// Global error type spanning command rejection, movement blocking, and
/// hardware driver failures.
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum RobotError {
    #[error("robot is not initialized; call initialize() first")]
    NotInitialized,

    #[error("movement blocked by obstacle at ({x},{y})")]
    BlockedByObstacle { x: i32, y: i32 },

    #[error("unrecognized command symbol '{0}'")]
    UnrecognizedCommand(char),

    #[error("hardware fault on {component}: {details}")]
    HardwareFault { component: String, details: String },
}

/// Telemetry event recorded by the command source for each interpreter
/// interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// e.g., "sweepos-cli::repl"
    pub source: String,
    pub payload: EventPayload,
}

impl Event {
    /// Stamp a new event from `source` with a fresh id and the current time.
    pub fn now(source: impl Into<String>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            source: source.into(),
            payload,
        }
    }
}

/// Variants of data recorded in the telemetry journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    /// A command symbol was accepted and the returned status string.
    CommandExecuted { symbol: char, status: String },
    /// The battery interlock flipped between mobile and recharging.
    PowerTransition { battery_low: bool },
    /// A command was rejected.
    Fault { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_HEADINGS: [Heading; 4] = [
        Heading::North,
        Heading::South,
        Heading::East,
        Heading::West,
    ];

    #[test]
    fn four_left_turns_return_to_start() {
        for h in ALL_HEADINGS {
            let mut heading = h;
            for _ in 0..4 {
                heading = heading.turned(TurnDirection::Left);
            }
            assert_eq!(heading, h);
        }
    }

    #[test]
    fn four_right_turns_return_to_start() {
        for h in ALL_HEADINGS {
            let mut heading = h;
            for _ in 0..4 {
                heading = heading.turned(TurnDirection::Right);
            }
            assert_eq!(heading, h);
        }
    }

    #[test]
    fn left_then_right_is_identity() {
        for h in ALL_HEADINGS {
            assert_eq!(
                h.turned(TurnDirection::Left).turned(TurnDirection::Right),
                h
            );
            assert_eq!(
                h.turned(TurnDirection::Right).turned(TurnDirection::Left),
                h
            );
        }
    }

    #[test]
    fn left_turn_follows_cyclic_order() {
        assert_eq!(Heading::North.turned(TurnDirection::Left), Heading::West);
        assert_eq!(Heading::West.turned(TurnDirection::Left), Heading::South);
        assert_eq!(Heading::South.turned(TurnDirection::Left), Heading::East);
        assert_eq!(Heading::East.turned(TurnDirection::Left), Heading::North);
    }

    #[test]
    fn right_turn_follows_reverse_order() {
        assert_eq!(Heading::North.turned(TurnDirection::Right), Heading::East);
        assert_eq!(Heading::East.turned(TurnDirection::Right), Heading::South);
        assert_eq!(Heading::South.turned(TurnDirection::Right), Heading::West);
        assert_eq!(Heading::West.turned(TurnDirection::Right), Heading::North);
    }

    #[test]
    fn unit_steps_match_grid_axes() {
        assert_eq!(Heading::North.unit_step(), (0, 1));
        assert_eq!(Heading::South.unit_step(), (0, -1));
        assert_eq!(Heading::East.unit_step(), (1, 0));
        assert_eq!(Heading::West.unit_step(), (-1, 0));
    }

    #[test]
    fn position_step_applies_unit_vector() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Heading::North), Position::new(0, 1));
        assert_eq!(origin.step(Heading::South), Position::new(0, -1));
        assert_eq!(origin.step(Heading::East), Position::new(1, 0));
        assert_eq!(origin.step(Heading::West), Position::new(-1, 0));
    }

    #[test]
    fn position_display_has_no_whitespace() {
        assert_eq!(Position::new(-3, 12).to_string(), "(-3,12)");
    }

    #[test]
    fn command_parse_recognised_symbols() {
        assert_eq!(Command::try_from('f').unwrap(), Command::Forward);
        assert_eq!(Command::try_from('l').unwrap(), Command::TurnLeft);
        assert_eq!(Command::try_from('r').unwrap(), Command::TurnRight);
    }

    #[test]
    fn command_parse_rejects_unknown_symbol() {
        let result = Command::try_from('a');
        assert!(matches!(result, Err(RobotError::UnrecognizedCommand('a'))));
    }

    #[test]
    fn command_symbol_roundtrip() {
        for cmd in [Command::Forward, Command::TurnLeft, Command::TurnRight] {
            assert_eq!(Command::try_from(cmd.symbol()).unwrap(), cmd);
        }
    }

    #[test]
    fn robot_error_display() {
        let err = RobotError::BlockedByObstacle { x: 0, y: 2 };
        assert!(err.to_string().contains("(0,2)"));

        let err2 = RobotError::UnrecognizedCommand('x');
        assert!(err2.to_string().contains('x'));

        let err3 = RobotError::HardwareFault {
            component: "drive_motor".to_string(),
            details: "stalled".to_string(),
        };
        assert!(err3.to_string().contains("drive_motor"));
    }

    #[test]
    fn event_roundtrip() {
        let event = Event::now(
            "sweepos-cli::repl",
            EventPayload::CommandExecuted {
                symbol: 'f',
                status: "(0,1,N)".to_string(),
            },
        );
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event.id, back.id);
        assert_eq!(event.source, back.source);
        match back.payload {
            EventPayload::CommandExecuted { symbol, status } => {
                assert_eq!(symbol, 'f');
                assert_eq!(status, "(0,1,N)");
            }
            _ => panic!("unexpected variant"),
        }
    }

    #[test]
    fn heading_serialization_roundtrip() {
        for h in ALL_HEADINGS {
            let json = serde_json::to_string(&h).unwrap();
            let back: Heading = serde_json::from_str(&json).unwrap();
            assert_eq!(h, back);
        }
    }
}

//! `DriveMotor` trait for the wheel and rotation motor driver.
//!
//! The original hardware is a dual-channel H-bridge: channel A pulses the
//! wheel motor for a one-cell advance, channel B pulses the rotation motor
//! for a 90° turn. Both routines are fire-and-stop; the driver blocks until
//! the pulse sequence completes, so the core never tracks motor state.

use sweepos_types::{RobotError, TurnDirection};

/// The drive train: one-cell forward pulses and 90° in-place rotations.
pub trait DriveMotor: Send + Sync {
    /// Run one full forward pulse sequence, advancing the robot a single
    /// cell. Returns after the motor has been stopped again.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::HardwareFault`] if the bridge rejects the
    /// command.
    fn forward(&mut self) -> Result<(), RobotError>;

    /// Rotate the robot body 90° toward `direction` and stop.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::HardwareFault`] if the bridge rejects the
    /// command.
    fn rotate(&mut self, direction: TurnDirection) -> Result<(), RobotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingMotor {
        forward_pulses: u32,
        left_turns: u32,
        right_turns: u32,
    }

    impl CountingMotor {
        fn new() -> Self {
            Self {
                forward_pulses: 0,
                left_turns: 0,
                right_turns: 0,
            }
        }
    }

    impl DriveMotor for CountingMotor {
        fn forward(&mut self) -> Result<(), RobotError> {
            self.forward_pulses += 1;
            Ok(())
        }

        fn rotate(&mut self, direction: TurnDirection) -> Result<(), RobotError> {
            match direction {
                TurnDirection::Left => self.left_turns += 1,
                TurnDirection::Right => self.right_turns += 1,
            }
            Ok(())
        }
    }

    #[test]
    fn counting_motor_records_commands() {
        let mut motor = CountingMotor::new();
        motor.forward().unwrap();
        motor.forward().unwrap();
        motor.rotate(TurnDirection::Left).unwrap();
        motor.rotate(TurnDirection::Right).unwrap();
        motor.rotate(TurnDirection::Right).unwrap();

        assert_eq!(motor.forward_pulses, 2);
        assert_eq!(motor.left_turns, 1);
        assert_eq!(motor.right_turns, 2);
    }
}

//! Calibrated servo wrapper. Each physical actuator gets its own pulse-width
//! bounds and travel direction, so a commanded percent means the same thing
//! on every servo regardless of linkage differences.

pub mod pwm;

use alloc::boxed::Box;
use core::cmp;

use crate::{config::pwm::Calibration, hal::pulse::PulsePin, Error};

pub type PulseOut = Box<dyn PulsePin + Send>;

pub struct Servo {
    output: PulseOut,
    calibration: Calibration,
    position: u8,
    enabled: bool,
}

impl Servo {
    pub fn new(output: PulseOut, calibration: Calibration) -> Result<Self, Error> {
        calibration.validate()?;
        Ok(Self { output, calibration, position: 0, enabled: false })
    }

    /// Command the servo to a percent of its calibrated travel.
    ///
    /// Out-of-range input is clamped, not rejected: a clamp is safer than a
    /// paused actuator, and the mechanical limits are exactly what the
    /// calibration encodes. On a hardware fault the servo fails safe by
    /// turning off; the next cycle's command supersedes, nothing retries.
    pub fn move_to(&mut self, percent: i16) -> Result<(), Error> {
        let percent = cmp::min(cmp::max(percent, 0), 100) as u16;
        let Calibration { min, max, reversed } = self.calibration;
        let travel = ((max - min) as u32 * percent as u32 / 100) as u16;
        let pulse = if reversed { max - travel } else { min + travel };
        if let Err(error) = self.output.set_pulse_width(pulse) {
            self.enabled = false;
            self.output.stop().ok();
            return Err(error);
        }
        self.enabled = true;
        self.position = percent as u8;
        Ok(())
    }

    /// Stop driving the output. The servo is left unpowered where it stands;
    /// this is not a move to 0%.
    pub fn turn_off(&mut self) -> Result<(), Error> {
        self.enabled = false;
        self.output.stop()
    }

    /// Whether the output is actively driven.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last commanded percent. Unchanged by `turn_off`.
    pub fn position(&self) -> u8 {
        self.position
    }
}

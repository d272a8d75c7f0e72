//! Control-surface glue: one calibrated servo per actuator, owned in one
//! place and commanded through methods instead of free-floating handles.

use core::cmp;

use embedded_hal::{blocking::delay::DelayMs, digital::v2::OutputPin};

use crate::{
    config::pwm::{Channel, Servos},
    lights::Lights,
    servo::{PulseOut, Servo},
    Error,
};

/// Mechanical settling hold after a kill, before the caller may halt.
pub const SETTLE_MS: u16 = 1000;

const CENTER: i16 = 50;

/// Raw control-channel values arrive in 1..=9 and span the full travel at 5.
/// Out-of-range input is clamped before the multiply so a misbehaving
/// upstream can never push a servo past its calibrated limits.
fn scale(raw: i16) -> i16 {
    if !(1..=9).contains(&raw) {
        warn!("control value {} outside 1..=9, clamping", raw);
    }
    cmp::min(cmp::max(raw, 1), 9) * 20
}

/// The raw pulse outputs, one per actuator channel.
pub struct Outputs {
    pub throttle: PulseOut,
    pub collective: [PulseOut; 3],
    pub rudder: PulseOut,
}

pub struct ControlSurface {
    throttle: Servo,
    collective: [Servo; 3],
    rudder: Servo,
}

impl ControlSurface {
    /// Builds one calibrated servo per channel. Two servos on one pin is
    /// undefined behavior at the hardware level, so a pin claimed twice
    /// rejects construction outright.
    pub fn new(outputs: Outputs, config: &Servos) -> Result<Self, Error> {
        let mut claimed: heapless::Vec<u8, 8> = heapless::Vec::new();
        for (_, pin) in config.pins() {
            if claimed.contains(&pin) {
                return Err(Error::Config("pin claimed by more than one servo"));
            }
            claimed.push(pin).ok();
        }
        let Outputs { throttle, collective, rudder } = outputs;
        let [collective1, collective2, collective3] = collective;
        Ok(Self {
            throttle: Servo::new(throttle, config.throttle.calibration)?,
            collective: [
                Servo::new(collective1, config.collective1.calibration)?,
                Servo::new(collective2, config.collective2.calibration)?,
                Servo::new(collective3, config.collective3.calibration)?,
            ],
            rudder: Servo::new(rudder, config.rudder.calibration)?,
        })
    }

    fn command(servo: &mut Servo, channel: Channel, percent: i16) {
        if let Err(error) = servo.move_to(percent) {
            let name: &str = channel.into();
            error!("{} command failed: {}", name, error);
        }
    }

    pub fn throttle_change(&mut self, raw: i16) {
        Self::command(&mut self.throttle, Channel::Throttle, scale(raw));
    }

    /// All three swashplate servos get the same percent; per-servo trim and
    /// reversal live in each servo's calibration.
    pub fn collective_change(&mut self, raw: i16) {
        let percent = scale(raw);
        let channels = [Channel::Collective1, Channel::Collective2, Channel::Collective3];
        for (servo, channel) in self.collective.iter_mut().zip(channels) {
            Self::command(servo, channel, percent);
        }
    }

    pub fn rudder_change(&mut self, raw: i16) {
        Self::command(&mut self.rudder, Channel::Rudder, scale(raw));
    }

    /// Fail-safe: throttle gets no signal, rudder and collectives center,
    /// lights go dark, then a blocking settling hold. Every step runs even
    /// if an earlier one faults.
    pub fn kill<P: OutputPin, D: DelayMs<u16>>(&mut self, lights: &mut Lights<P>, delay: &mut D) {
        warn!("kill switch engaged");
        if let Err(error) = self.throttle.turn_off() {
            error!("throttle shutoff failed: {}", error);
        }
        Self::command(&mut self.rudder, Channel::Rudder, CENTER);
        let channels = [Channel::Collective1, Channel::Collective2, Channel::Collective3];
        for (servo, channel) in self.collective.iter_mut().zip(channels) {
            Self::command(servo, channel, CENTER);
        }
        if let Err(error) = lights.all_off() {
            error!("light shutoff failed: {}", error);
        }
        delay.delay_ms(SETTLE_MS);
    }
}

#[cfg(test)]
mod test {
    use std::vec::Vec;

    use embedded_hal::blocking::delay::DelayMs;

    use super::{scale, ControlSurface, Outputs};
    use crate::config::outputs::ActiveLevel;
    use crate::config::pwm::{Calibration, Servos};
    use crate::lights::test::PinLog;
    use crate::lights::{Light, Lights};
    use crate::servo::test::{Command, PulseLog};

    #[derive(Default)]
    struct DelayLog {
        held: Vec<u16>,
    }

    impl DelayMs<u16> for DelayLog {
        fn delay_ms(&mut self, ms: u16) {
            self.held.push(ms);
        }
    }

    struct Rig {
        surface: ControlSurface,
        throttle: PulseLog,
        collective: [PulseLog; 3],
        rudder: PulseLog,
    }

    fn rig(config: &Servos) -> Rig {
        let throttle = PulseLog::default();
        let collective = [PulseLog::default(), PulseLog::default(), PulseLog::default()];
        let rudder = PulseLog::default();
        let outputs = Outputs {
            throttle: throttle.pin(),
            collective: [collective[0].pin(), collective[1].pin(), collective[2].pin()],
            rudder: rudder.pin(),
        };
        let surface = ControlSurface::new(outputs, config).unwrap();
        Rig { surface, throttle, collective, rudder }
    }

    #[test]
    fn test_duplicate_pin_rejected_at_construction() {
        let mut config = Servos::default();
        config.throttle.pin = config.rudder.pin;
        let outputs = Outputs {
            throttle: PulseLog::default().pin(),
            collective: [
                PulseLog::default().pin(),
                PulseLog::default().pin(),
                PulseLog::default().pin(),
            ],
            rudder: PulseLog::default().pin(),
        };
        let result = ControlSurface::new(outputs, &config);
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_scale_contract() {
        assert_eq!(scale(1), 20);
        assert_eq!(scale(5), 100);
        assert_eq!(scale(9), 180);
        assert_eq!(scale(0), 20);
        assert_eq!(scale(-3), 20);
        assert_eq!(scale(12), 180);
    }

    #[test]
    fn test_throttle_full_travel_at_five() {
        let mut rig = rig(&Servos::default());
        rig.surface.throttle_change(5);
        assert_eq!(rig.throttle.last(), Some(Command::Pulse(2000)));
    }

    #[test]
    fn test_throttle_minimum_raw() {
        let mut rig = rig(&Servos::default());
        rig.surface.throttle_change(1);
        assert_eq!(rig.throttle.last(), Some(Command::Pulse(1200)));
    }

    #[test]
    fn test_out_of_range_raw_clamped() {
        let mut rig = rig(&Servos::default());
        rig.surface.rudder_change(0);
        assert_eq!(rig.rudder.last(), Some(Command::Pulse(1200)));
        rig.surface.rudder_change(12);
        assert_eq!(rig.rudder.last(), Some(Command::Pulse(2000)));
    }

    #[test]
    fn test_collective_drives_all_three() {
        let mut config = Servos::default();
        config.collective2.calibration = Calibration::new(1000, 2000, true).unwrap();
        let mut rig = rig(&config);
        rig.surface.collective_change(2);
        assert_eq!(rig.collective[0].last(), Some(Command::Pulse(1400)));
        assert_eq!(rig.collective[1].last(), Some(Command::Pulse(1600)));
        assert_eq!(rig.collective[2].last(), Some(Command::Pulse(1400)));
        assert_eq!(rig.throttle.last(), None);
    }

    #[test]
    fn test_kill_sequence() {
        let mut rig = rig(&Servos::default());
        rig.surface.throttle_change(5);
        rig.surface.collective_change(9);

        let flood = PinLog::default();
        let tlof = PinLog::default();
        let fato = PinLog::default();
        let mut lights = Lights::new(
            Light::new(flood.pin(), ActiveLevel::High),
            Light::new(tlof.pin(), ActiveLevel::High),
            Light::new(fato.pin(), ActiveLevel::High),
        );
        let mut delay = DelayLog::default();
        rig.surface.kill(&mut lights, &mut delay);

        assert_eq!(rig.throttle.last(), Some(Command::Stop));
        assert_eq!(rig.rudder.last(), Some(Command::Pulse(1500)));
        for log in rig.collective.iter() {
            assert_eq!(log.last(), Some(Command::Pulse(1500)));
        }
        assert_eq!(flood.last(), Some(false));
        assert_eq!(tlof.last(), Some(false));
        assert_eq!(fato.last(), Some(false));
        assert_eq!(delay.held, [super::SETTLE_MS]);
    }
}

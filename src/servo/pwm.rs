use embedded_hal::PwmPin;

use crate::{hal::pulse::PulsePin, Error};

fn to_duty(max_duty: u16, rate: u16, microseconds: u16) -> u16 {
    let duty_per_ms = max_duty as u32 * rate as u32 / 1000;
    (duty_per_ms * microseconds as u32 / 1000) as u16
}

/// Adapts a hardware PWM channel into the microsecond pulse seam.
///
/// Calibration is a separate concern from pulse generation, so the servo
/// holds one of these rather than extending the PWM type.
pub struct PwmPulse<P> {
    pwm: P,
    rate: u16,
}

impl<P: PwmPin<Duty = u16>> PwmPulse<P> {
    /// `rate` is the refresh rate in Hz, conventionally 50 for analog servos.
    pub fn new(pwm: P, rate: u16) -> Self {
        Self { pwm, rate }
    }
}

impl<P: PwmPin<Duty = u16>> PulsePin for PwmPulse<P> {
    fn set_pulse_width(&mut self, microseconds: u16) -> Result<(), Error> {
        let duty = to_duty(self.pwm.get_max_duty(), self.rate, microseconds);
        self.pwm.set_duty(duty);
        self.pwm.enable();
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Error> {
        self.pwm.disable();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use embedded_hal::PwmPin;

    use super::{to_duty, PwmPulse};
    use crate::hal::pulse::PulsePin;

    #[test]
    fn test_to_duty() {
        let max_duty = 20000;
        assert_eq!(to_duty(max_duty, 50, 1000), 1000);
        assert_eq!(to_duty(max_duty, 50, 1500), 1500);
        assert_eq!(to_duty(max_duty, 50, 2000), 2000);
        assert_eq!(to_duty(max_duty, 400, 2500), 20000);
    }

    #[derive(Default)]
    struct FakePwm {
        duty: u16,
        enabled: bool,
    }

    impl PwmPin for FakePwm {
        type Duty = u16;

        fn disable(&mut self) {
            self.enabled = false;
        }

        fn enable(&mut self) {
            self.enabled = true;
        }

        fn get_duty(&self) -> u16 {
            self.duty
        }

        fn get_max_duty(&self) -> u16 {
            20000
        }

        fn set_duty(&mut self, duty: u16) {
            self.duty = duty;
        }
    }

    #[test]
    fn test_pulse_drives_pwm() {
        let mut pulse = PwmPulse::new(FakePwm::default(), 50);
        pulse.set_pulse_width(1500).unwrap();
        assert_eq!(pulse.pwm.duty, 1500);
        assert!(pulse.pwm.enabled);
        pulse.stop().unwrap();
        assert!(!pulse.pwm.enabled);
    }
}

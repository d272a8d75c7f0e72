//! Declarative configuration: which pin drives which actuator or light, and
//! how each servo is calibrated. Validated once at startup; a bad config is
//! fatal and the board refuses to run.

pub mod outputs;
pub mod pwm;

use serde::{Deserialize, Serialize};

use crate::Error;
use outputs::Lights;
use pwm::Servos;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub servos: Servos,
    pub lights: Lights,
}

impl Config {
    /// Rejects inverted calibrations and any pin claimed twice, across
    /// servos and lights alike. Two owners of one pin is undefined
    /// behavior at the hardware level, so it never gets that far.
    pub fn validate(&self) -> Result<(), Error> {
        self.servos.validate()?;
        let mut claimed: heapless::Vec<u8, 16> = heapless::Vec::new();
        for (_, pin) in self.servos.pins() {
            if claimed.contains(&pin) {
                return Err(Error::Config("pin claimed by more than one output"));
            }
            claimed.push(pin).ok();
        }
        for pin in self.lights.pins() {
            if claimed.contains(&pin) {
                return Err(Error::Config("pin claimed by more than one output"));
            }
            claimed.push(pin).ok();
        }
        Ok(())
    }
}

mod test {
    #[test]
    fn test_default_config_is_valid() {
        use super::Config;

        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_inverted_calibration_rejected() {
        use super::Config;

        let mut config = Config::default();
        config.servos.rudder.calibration.min = 2000;
        config.servos.rudder.calibration.max = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        use super::Config;

        let mut config = Config::default();
        config.servos.throttle.pin = config.servos.rudder.pin;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.lights.flood.pin = config.servos.throttle.pin;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        use std::string::String;

        use super::Config;

        let mut config = Config::default();
        config.servos.collective2.calibration.reversed = true;
        config.lights.tlof.active = super::outputs::ActiveLevel::Low;
        let json: String = serde_json::to_string(&config).unwrap();
        let decoded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
    }
}

use serde::{Deserialize, Serialize};

use crate::Error;

/// Actuator channels, one per pulse output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Throttle,
    Collective1,
    Collective2,
    Collective3,
    Rudder,
}

impl Into<&str> for Channel {
    fn into(self) -> &'static str {
        match self {
            Self::Throttle => "throttle",
            Self::Collective1 => "collective-1",
            Self::Collective2 => "collective-2",
            Self::Collective3 => "collective-3",
            Self::Rudder => "rudder",
        }
    }
}

/// Per-servo travel calibration, pulse widths in microseconds.
///
/// The swashplate servos have slight variations in linkage length and arm
/// position, so each one gets its own bounds, and at least one of them runs
/// reversed relative to the logical percent scale.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub min: u16,
    pub max: u16,
    pub reversed: bool,
}

impl Default for Calibration {
    fn default() -> Self {
        Self { min: 1000, max: 2000, reversed: false }
    }
}

impl Calibration {
    pub fn new(min: u16, max: u16, reversed: bool) -> Result<Self, Error> {
        let calibration = Self { min, max, reversed };
        calibration.validate()?;
        Ok(calibration)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.min >= self.max {
            return Err(Error::Config("servo calibration requires min < max"));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServoChannel {
    pub pin: u8,
    pub calibration: Calibration,
}

impl Default for ServoChannel {
    fn default() -> Self {
        Self { pin: 0, calibration: Calibration::default() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Servos {
    pub throttle: ServoChannel,
    pub collective1: ServoChannel,
    pub collective2: ServoChannel,
    pub collective3: ServoChannel,
    pub rudder: ServoChannel,
}

impl Default for Servos {
    fn default() -> Self {
        let servo = ServoChannel::default();
        Self {
            throttle: ServoChannel { pin: 15, ..servo },
            collective1: ServoChannel { pin: 0, ..servo },
            collective2: ServoChannel { pin: 4, ..servo },
            collective3: ServoChannel { pin: 5, ..servo },
            rudder: ServoChannel { pin: 16, ..servo },
        }
    }
}

impl Servos {
    pub fn get(&self, channel: Channel) -> &ServoChannel {
        match channel {
            Channel::Throttle => &self.throttle,
            Channel::Collective1 => &self.collective1,
            Channel::Collective2 => &self.collective2,
            Channel::Collective3 => &self.collective3,
            Channel::Rudder => &self.rudder,
        }
    }

    pub fn pins(&self) -> [(Channel, u8); 5] {
        [
            (Channel::Throttle, self.throttle.pin),
            (Channel::Collective1, self.collective1.pin),
            (Channel::Collective2, self.collective2.pin),
            (Channel::Collective3, self.collective3.pin),
            (Channel::Rudder, self.rudder.pin),
        ]
    }

    pub fn validate(&self) -> Result<(), Error> {
        let channels =
            [&self.throttle, &self.collective1, &self.collective2, &self.collective3, &self.rudder];
        for channel in channels {
            channel.calibration.validate()?;
        }
        Ok(())
    }
}

mod test {
    #[test]
    fn test_calibration_rejects_inverted_bounds() {
        use super::Calibration;

        assert!(Calibration::new(1000, 2000, false).is_ok());
        assert!(Calibration::new(2000, 1000, false).is_err());
        assert!(Calibration::new(1500, 1500, false).is_err());
    }

    #[test]
    fn test_channel_names() {
        use super::Channel;

        let name: &str = Channel::Collective2.into();
        assert_eq!(name, "collective-2");
    }
}

use serde::{Deserialize, Serialize};

/// Logic level that turns an output "on". Some boards treat HIGH as off,
/// so polarity is a deployment setting, never hard-coded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveLevel {
    High,
    Low,
}

impl Default for ActiveLevel {
    fn default() -> Self {
        Self::High
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub pin: u8,
    pub active: ActiveLevel,
}

impl Default for Light {
    fn default() -> Self {
        Self { pin: 0, active: ActiveLevel::High }
    }
}

/// Helipad lighting: flood, touchdown/liftoff (TLOF) and final-approach
/// (FATO) lights, plus the MCU status LED mirrored by the flood light.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Lights {
    pub flood: Light,
    pub tlof: Light,
    pub fato: Light,
    pub status: Option<Light>,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            flood: Light { pin: 12, active: ActiveLevel::High },
            tlof: Light { pin: 13, active: ActiveLevel::High },
            fato: Light { pin: 14, active: ActiveLevel::High },
            // the ESP-12 module LED is wired active-low
            status: Some(Light { pin: 2, active: ActiveLevel::Low }),
        }
    }
}

impl Lights {
    pub fn pins(&self) -> impl Iterator<Item = u8> {
        let status = self.status.map(|light| light.pin);
        [Some(self.flood.pin), Some(self.tlof.pin), Some(self.fato.pin), status]
            .into_iter()
            .flatten()
    }
}

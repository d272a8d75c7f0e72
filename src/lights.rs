//! Helipad lighting. Plain digital outputs with per-deployment polarity.

use embedded_hal::digital::v2::OutputPin;

use crate::{config::outputs::ActiveLevel, Error};

pub struct Light<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: OutputPin> Light<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    pub fn set(&mut self, on: bool) -> Result<(), Error> {
        let high = match self.active {
            ActiveLevel::High => on,
            ActiveLevel::Low => !on,
        };
        let result = if high { self.pin.set_high() } else { self.pin.set_low() };
        result.map_err(|_| Error::Hardware("light pin rejected command"))
    }
}

/// Flood, touchdown/liftoff (TLOF) and final-approach (FATO) lights.
/// The board status LED, when present, mirrors the flood light.
pub struct Lights<P> {
    flood: Light<P>,
    tlof: Light<P>,
    fato: Light<P>,
    status: Option<Light<P>>,
}

impl<P: OutputPin> Lights<P> {
    pub fn new(flood: Light<P>, tlof: Light<P>, fato: Light<P>) -> Self {
        Self { flood, tlof, fato, status: None }
    }

    pub fn with_status(mut self, status: Light<P>) -> Self {
        self.status = Some(status);
        self
    }

    pub fn flood_change(&mut self, on: bool) -> Result<(), Error> {
        self.flood.set(on)?;
        if let Some(status) = self.status.as_mut() {
            status.set(on)?;
        }
        Ok(())
    }

    pub fn tlof_change(&mut self, on: bool) -> Result<(), Error> {
        self.tlof.set(on)
    }

    pub fn fato_change(&mut self, on: bool) -> Result<(), Error> {
        self.fato.set(on)
    }

    /// Extinguish everything. Attempts every light even if one faults,
    /// returning the first error; this is the kill-switch path.
    pub fn all_off(&mut self) -> Result<(), Error> {
        let flood = self.flood_change(false);
        let tlof = self.tlof.set(false);
        let fato = self.fato.set(false);
        flood.and(tlof).and(fato)
    }
}

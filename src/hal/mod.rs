//! Hardware seams. Boards implement or provide these; the rest of the crate
//! never touches a register.

pub mod pulse;

pub use embedded_hal::blocking::delay::DelayMs;
pub use embedded_hal::digital::v2::OutputPin;
pub use pulse::PulsePin;

use crate::Error;

/// Periodic pulse-width output with microsecond resolution.
///
/// Implementors own the periodic pulse generation; callers only command the
/// width of the high phase, or stop driving the line entirely.
pub trait PulsePin {
    fn set_pulse_width(&mut self, microseconds: u16) -> Result<(), Error>;

    /// Stop driving the output. This is "no signal", not "minimum pulse":
    /// an ESC treats the two differently.
    fn stop(&mut self) -> Result<(), Error>;
}

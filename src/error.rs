use thiserror::Error;

/// Fault taxonomy for the actuation layer.
///
/// `Config` is fatal at startup and the process should refuse to run.
/// `Hardware` means the underlying pin or pulse driver rejected a command;
/// the affected actuator fails safe by turning off, and the next control
/// cycle supersedes the failed command. Nothing is ever retried.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(&'static str),
    #[error("hardware fault: {0}")]
    Hardware(&'static str),
}

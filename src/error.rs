use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input stream has no more lines to deliver.
    #[error("No more input: the input stream was exhausted.")]
    InputExhausted,

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// An interactive terminal prompt failed.
    #[error("Terminal prompt failed. Original error: {0}")]
    TerminalError(#[from] dialoguer::Error),

    #[error("Unknown severity code: {0}. Expected a value between 0 and 4.")]
    InvalidSeverity(i32),

    #[error("Invalid {name}: '{value}' is not a whole number.")]
    InvalidDimension { name: String, value: String },

    #[error("Cannot proceed: the container volume does not fit in 64 bits.")]
    VolumeOverflow,
}

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InputExhausted => exit_codes::INPUT_EXHAUSTED,
            _ => exit_codes::FAILURE,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with [`Error::exit_code`].
pub fn default_error_handler(err: Error) {
    log::debug!("Terminating: {err:?}");
    eprintln!("{}", err);
    std::process::exit(err.exit_code());
}

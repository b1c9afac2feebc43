/// Handles argument parsing and command dispatch.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Console, terminal and scripted dialog providers.
pub mod dialog;

/// Defines custom error types.
pub mod error;

/// Transport container volume calculator.
pub mod volume;

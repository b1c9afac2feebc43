//! Dialog-style messages and input prompts on a console
//!
//! The module is structured in layers:
//! - `interface`: abstract interfaces independent of any stream or UI library
//! - `console`: the line-oriented facade over an input reader and output writer
//! - `terminal`: an interactive implementation using the dialoguer library
//! - `scripted`: predefined answers for automation and tests

pub mod console;
pub mod interface;
pub mod scripted;
pub mod severity;
pub mod terminal;

pub use console::ConsoleDialog;
pub use interface::*;
pub use scripted::ScriptedDialog;
pub use severity::Severity;
pub use terminal::TerminalDialog;

//! Pure interfaces for dialogs without external dependencies
//!
//! This module defines abstract interfaces for showing messages and asking for
//! a line of input. They are independent of the stream or UI library that
//! backs a concrete provider.

use super::Severity;
use crate::constants::TITLE_SEPARATOR;
use crate::error::Result;

/// Options for message display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub title: Option<String>,
    pub severity: Severity,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Options for input requests
///
/// `initial_selection` is accepted for call compatibility with dialog-style
/// APIs and is never used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOptions {
    pub title: Option<String>,
    pub severity: Severity,
    pub initial_selection: Option<String>,
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_initial_selection(mut self, selection: impl Into<String>) -> Self {
        self.initial_selection = Some(selection.into());
        self
    }
}

/// Formats a message the way every provider prints it: `title : message`
/// when a title is present, otherwise the bare message.
pub fn format_line(message: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{title}{TITLE_SEPARATOR}{message}"),
        None => message.to_string(),
    }
}

/// Abstract interface for showing a message
pub trait MessageDisplay {
    fn display(&mut self, message: &str, options: &MessageOptions) -> Result<()>;

    /// Shows a message without title.
    fn show(&mut self, message: &str) -> Result<()> {
        self.display(message, &MessageOptions::default())
    }
}

/// Abstract interface for requesting one line of input
pub trait InputRequester {
    /// Writes the prompt and blocks until a line is available.
    ///
    /// Fails with [`crate::error::Error::InputExhausted`] when the input has
    /// no more lines.
    fn request_input(&mut self, prompt: &str, options: &InputOptions) -> Result<String>;

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.request_input(prompt, &InputOptions::default())
    }
}

/// Combined interface that provides both dialog families
pub trait DialogProvider: MessageDisplay + InputRequester {}

// Blanket implementation for any type that implements both dialog interfaces
impl<T> DialogProvider for T where T: MessageDisplay + InputRequester {}

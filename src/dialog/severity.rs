use crate::error::{Error, Result};
use clap::ValueEnum;
use std::fmt::Display;

/// Classification tag a caller attaches to a dialog.
///
/// The tag is carried through every call and never changes what is written
/// or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    #[default]
    Plain,
    Information,
    Question,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Warning,
        Severity::Error,
        Severity::Plain,
        Severity::Information,
        Severity::Question,
    ];

    /// Numeric message-type code used by dialog-style APIs.
    pub fn code(self) -> i32 {
        match self {
            Severity::Warning => 0,
            Severity::Error => 1,
            Severity::Plain => 2,
            Severity::Information => 3,
            Severity::Question => 4,
        }
    }
}

impl TryFrom<i32> for Severity {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.code() == code)
            .ok_or(Error::InvalidSeverity(code))
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Plain => "plain",
            Severity::Information => "information",
            Severity::Question => "question",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(Severity::try_from(severity.code()).unwrap(), severity);
        }
        assert_eq!(Severity::Information.code(), 3);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(matches!(Severity::try_from(5), Err(Error::InvalidSeverity(5))));
        assert!(matches!(Severity::try_from(-1), Err(Error::InvalidSeverity(-1))));
    }

    #[test]
    fn display_severity_variants() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Question.to_string(), "question");
        assert_eq!(Severity::default(), Severity::Plain);
    }
}

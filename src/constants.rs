//! Constants used throughout optionpane

/// Placed between a title and its message.
pub const TITLE_SEPARATOR: &str = " : ";

/// Line terminator written after every message and prompt.
pub const LINE_TERMINATOR: &str = "\n";

/// Texts shown by the container volume calculator
pub mod volume {
    pub const HEADING: &str = "Transport Container Volume Calculator";
    pub const INPUT_TITLE: &str = "Dimensions";
    pub const RESULT_TITLE: &str = "Result";
    pub const DIMENSION_NAMES: [&str; 3] = ["width", "height", "depth"];
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const INPUT_EXHAUSTED: i32 = 2;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

use crate::{
    constants::{exit_codes, verbosity},
    dialog::{InputOptions, MessageOptions, Severity},
};
use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Console stand-in for dialog-style messages and input prompts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use interactive terminal prompts instead of plain standard streams.
    #[arg(long, global = true)]
    pub terminal: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Display a message.
    Message(MessageArgs),
    /// Ask for one line of input and print the answer.
    Input(InputArgs),
    /// Run the transport container volume calculator.
    Volume,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct MessageArgs {
    /// Text to display.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Title shown before the message.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Severity tag carried with the message.
    #[arg(short, long, value_enum, default_value_t = Severity::Plain)]
    pub severity: Severity,
}

impl MessageArgs {
    pub fn options(&self) -> MessageOptions {
        MessageOptions { title: self.title.clone(), severity: self.severity }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InputArgs {
    /// Prompt shown before reading the answer.
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Title shown before the prompt.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Severity tag carried with the prompt.
    #[arg(short, long, value_enum, default_value_t = Severity::Question)]
    pub severity: Severity,

    /// Accepted for compatibility with dialog-style callers; not used.
    #[arg(long = "initial-selection")]
    pub initial_selection: Option<String>,
}

impl InputArgs {
    pub fn options(&self) -> InputOptions {
        InputOptions {
            title: self.title.clone(),
            severity: self.severity,
            initial_selection: self.initial_selection.clone(),
        }
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

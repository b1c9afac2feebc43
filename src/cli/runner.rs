use crate::{
    cli::{Cli, Commands},
    dialog::{ConsoleDialog, DialogProvider, TerminalDialog},
    error::Result,
    volume::VolumeCalculator,
};

/// Main CLI runner that executes one command against a dialog provider
pub struct Runner<'a, D: DialogProvider> {
    dialog: &'a mut D,
}

impl<'a, D: DialogProvider> Runner<'a, D> {
    pub fn new(dialog: &'a mut D) -> Self {
        Self { dialog }
    }

    pub fn run(mut self, command: &Commands) -> Result<()> {
        match command {
            Commands::Message(args) => {
                log::debug!("Running message command");
                self.dialog.display(&args.message, &args.options())
            }
            Commands::Input(args) => {
                log::debug!("Running input command");
                let answer = self.dialog.request_input(&args.prompt, &args.options())?;
                self.dialog.show(&answer)
            }
            Commands::Volume => {
                log::debug!("Running volume calculator");
                VolumeCalculator::new(self.dialog).run().map(|_| ())
            }
        }
    }
}

/// Entry point used by the binary: picks the provider from the flags.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.terminal {
        log::debug!("Using interactive terminal dialogs");
        Runner::new(&mut TerminalDialog::new()).run(&cli.command)
    } else {
        Runner::new(&mut ConsoleDialog::stdio()).run(&cli.command)
    }
}

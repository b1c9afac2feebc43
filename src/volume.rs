//! Transport container volume calculator
//!
//! Asks for the three dimensions of a container, then reports its volume and
//! the dimensions concatenated as strings.

use crate::{
    constants::volume::{DIMENSION_NAMES, HEADING, INPUT_TITLE, RESULT_TITLE},
    dialog::{DialogProvider, InputOptions, MessageOptions, Severity},
    error::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerDimensions {
    pub width: u64,
    pub height: u64,
    pub depth: u64,
}

impl ContainerDimensions {
    pub fn new(width: u64, height: u64, depth: u64) -> Self {
        Self { width, height, depth }
    }

    pub fn volume(&self) -> Result<u64> {
        self.width
            .checked_mul(self.height)
            .and_then(|area| area.checked_mul(self.depth))
            .ok_or(Error::VolumeOverflow)
    }

    /// The three dimensions written one after another, e.g. `102030`.
    pub fn concatenated(&self) -> String {
        format!("{}{}{}", self.width, self.height, self.depth)
    }
}

/// Outcome of one calculator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeReport {
    pub dimensions: ContainerDimensions,
    pub volume: u64,
    pub concatenated: String,
}

impl VolumeReport {
    pub fn from_dimensions(dimensions: ContainerDimensions) -> Result<Self> {
        Ok(Self {
            volume: dimensions.volume()?,
            concatenated: dimensions.concatenated(),
            dimensions,
        })
    }
}

/// Parses a dimension answer. Surrounding whitespace is ignored.
pub fn parse_dimension(name: &str, answer: &str) -> Result<u64> {
    answer.trim().parse().map_err(|_| Error::InvalidDimension {
        name: name.to_string(),
        value: answer.to_string(),
    })
}

/// Drives the calculator conversation over any dialog provider
pub struct VolumeCalculator<'a, D: DialogProvider> {
    dialog: &'a mut D,
}

impl<'a, D: DialogProvider> VolumeCalculator<'a, D> {
    pub fn new(dialog: &'a mut D) -> Self {
        Self { dialog }
    }

    pub fn run(mut self) -> Result<VolumeReport> {
        self.dialog.show(HEADING)?;

        let dimensions = self.ask_dimensions()?;
        let report = VolumeReport::from_dimensions(dimensions)?;
        log::info!("Computed volume {} for {:?}", report.volume, report.dimensions);

        self.report(&report)?;
        Ok(report)
    }

    fn ask_dimensions(&mut self) -> Result<ContainerDimensions> {
        let options = InputOptions::new()
            .with_title(INPUT_TITLE)
            .with_severity(Severity::Question);

        let mut values = [0u64; 3];
        for (value, name) in values.iter_mut().zip(DIMENSION_NAMES) {
            let answer = self
                .dialog
                .request_input(&format!("Enter the container {name}:"), &options)?;
            *value = parse_dimension(name, &answer)?;
        }

        let [width, height, depth] = values;
        Ok(ContainerDimensions::new(width, height, depth))
    }

    fn report(&mut self, report: &VolumeReport) -> Result<()> {
        let options = MessageOptions::new()
            .with_title(RESULT_TITLE)
            .with_severity(Severity::Information);

        self.dialog
            .display(&format!("The volume of the container is {}", report.volume), &options)?;
        self.dialog.display(
            &format!("The dimensions concatenated are {}", report.concatenated),
            &options,
        )
    }
}

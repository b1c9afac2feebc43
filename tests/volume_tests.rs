use optionpane::dialog::{ConsoleDialog, ScriptedDialog};
use optionpane::error::Error;
use optionpane::volume::{ContainerDimensions, VolumeCalculator};
use std::io::Cursor;
use test_log::test;

#[test]
fn calculator_reports_volume_and_concatenation() {
    let mut dialog = ScriptedDialog::new().with_answers(["10", "20", "30"]);
    let report = VolumeCalculator::new(&mut dialog).run().unwrap();

    assert_eq!(report.dimensions, ContainerDimensions::new(10, 20, 30));
    assert_eq!(report.volume, 6000);
    assert_eq!(report.concatenated, "102030");
    assert_eq!(
        dialog.transcript(),
        [
            "Transport Container Volume Calculator",
            "Dimensions : Enter the container width:",
            "Dimensions : Enter the container height:",
            "Dimensions : Enter the container depth:",
            "Result : The volume of the container is 6000",
            "Result : The dimensions concatenated are 102030",
        ]
    );
}

#[test]
fn calculator_over_console_streams() {
    let input = Cursor::new(b"3\n4\n5\n".to_vec());
    let mut dialog = ConsoleDialog::new(input, Vec::new());
    let report = VolumeCalculator::new(&mut dialog).run().unwrap();
    assert_eq!(report.volume, 60);

    let (_, output) = dialog.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Transport Container Volume Calculator\n"));
    assert!(output.ends_with("Result : The dimensions concatenated are 345\n"));
}

#[test]
fn calculator_stops_when_input_runs_out() {
    let mut dialog = ScriptedDialog::new().with_answers(["10", "20"]);
    let result = VolumeCalculator::new(&mut dialog).run();
    assert!(matches!(result, Err(Error::InputExhausted)));
    assert_eq!(dialog.transcript().len(), 4);
}

#[test]
fn calculator_rejects_non_numeric_dimension() {
    let mut dialog = ScriptedDialog::new().with_answers(["10", "tall", "30"]);
    let result = VolumeCalculator::new(&mut dialog).run();
    assert!(matches!(
        result,
        Err(Error::InvalidDimension { ref name, ref value }) if name == "height" && value == "tall"
    ));
    assert_eq!(dialog.remaining_answers(), 1);
}

#[test]
fn calculator_reports_overflow() {
    let big = u64::MAX.to_string();
    let mut dialog = ScriptedDialog::new().with_answers([big.as_str(), "2", "1"]);
    let result = VolumeCalculator::new(&mut dialog).run();
    assert!(matches!(result, Err(Error::VolumeOverflow)));
}

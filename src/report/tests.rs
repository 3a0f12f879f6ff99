use super::*;

use std::collections::TryReserveError;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use rstest::rstest;

use crate::{
    error::Error,
    template::Field,
    testing::Sample,
    timestamp::FixedClock,
    verbosity::{Verbosity, VerbosityFlag},
};

const TS: &str = "2024/01/02 03:04:05";

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
            .into(),
    )
}

fn reporter(output_format: Option<&str>) -> Reporter<FixedClock> {
    let settings = Settings {
        verbosity: Verbosity::empty(),
        output_format: output_format.map(String::from),
        ..Settings::default()
    };
    Reporter::with_theme(&settings, Theme::plain()).with_clock(clock())
}

#[test]
fn test_successful_login() {
    let reporter = reporter(Some("%DATETIME% %HOSTNAME%:%PORT% %USERNAME%/%PASSWORD%\n"));
    let mut diagnostics = Vec::new();
    let mut output = Vec::new();
    reporter
        .log_successful_login(&mut diagnostics, &mut output, &Login::sample())
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), format!("{TS} 10.0.0.5:22 root/toor\n"));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_missing_output_format() {
    let reporter = reporter(None);
    let mut diagnostics = Vec::new();
    let mut output = Vec::new();
    let result = reporter.log_successful_login(&mut diagnostics, &mut output, &Login::sample());
    assert_matches!(result, Err(Error::MissingOutputFormat));
    assert!(output.is_empty());

    let diagnostics = String::from_utf8(diagnostics).unwrap();
    assert_eq!(diagnostics.lines().count(), 1);
    assert!(diagnostics.starts_with(&format!("\x1b[2K\r[{TS}] ")), "{diagnostics:?}");
    assert!(diagnostics.ends_with("output format is not configured\n"), "{diagnostics:?}");
}

#[test]
fn test_diagnostic_points_at_caller() {
    let reporter = reporter(None);
    let mut diagnostics = Vec::new();
    let line = line!() + 1;
    let _ = reporter.log_successful_login(&mut diagnostics, &mut io::sink(), &Login::sample());
    let diagnostics = String::from_utf8(diagnostics).unwrap();
    assert!(diagnostics.contains(&format!("{}:{} ", file!(), line)), "{diagnostics:?}");
}

#[test]
fn test_default_settings_render() {
    let reporter = Reporter::with_theme(&Settings::default(), Theme::plain()).with_clock(clock());
    let line = reporter.renderer().render(&Login::sample()).unwrap();
    assert_eq!(line, format!("{TS}\t10.0.0.5:22\troot\ttoor\n"));
    assert!(!reporter.printer().enabled(crate::level::Level::Debug));
}

fn reserve_error() -> TryReserveError {
    String::new().try_reserve(usize::MAX).unwrap_err()
}

fn assert_single_error_line(diagnostics: Vec<u8>, message: &str) {
    let diagnostics = String::from_utf8(diagnostics).unwrap();
    assert_eq!(diagnostics.lines().count(), 1, "{diagnostics:?}");
    assert!(diagnostics.starts_with(&format!("\x1b[2K\r[{TS}] ")), "{diagnostics:?}");
    assert!(diagnostics.ends_with(&format!("{message}\n")), "{diagnostics:?}");
}

#[rstest]
#[case::missing_output_format(Error::MissingOutputFormat)]
#[case::allocation(Error::Allocation(reserve_error()))]
#[case::substitution(Error::Substitution { field: Field::Password, source: reserve_error() })]
#[case::io(Error::Io(io::Error::other("disk full")))]
fn test_each_failure_prints_one_line(#[case] err: Error) {
    let reporter = reporter(Some("%HOSTNAME%\n"));
    let message = err.to_string();
    let mut diagnostics = Vec::new();
    let result = reporter.report::<(), _>(&mut diagnostics, Err(err));
    assert!(result.is_err());
    assert_single_error_line(diagnostics, &message);
}

#[test]
fn test_success_prints_nothing() {
    let reporter = reporter(None);
    let mut diagnostics = Vec::new();
    assert_matches!(reporter.report(&mut diagnostics, Ok(7)), Ok(7));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_write_failure_prints_one_line() {
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let reporter = reporter(Some("%HOSTNAME%\n"));
    let mut diagnostics = Vec::new();
    let result = reporter.log_successful_login(&mut diagnostics, &mut Broken, &Login::sample());
    assert_matches!(result, Err(Error::Io(_)));
    assert_single_error_line(diagnostics, "disk full");
}

#[test]
fn test_verbose_reporter_prints_one_line() {
    let settings = Settings {
        verbosity: VerbosityFlag::Verbose.into(),
        output_format: None,
        ..Settings::default()
    };
    let reporter = Reporter::with_theme(&settings, Theme::plain()).with_clock(clock());
    let mut diagnostics = Vec::new();
    let result = reporter.log_successful_login(&mut diagnostics, &mut io::sink(), &Login::sample());
    assert_matches!(result, Err(Error::MissingOutputFormat));
    assert_single_error_line(diagnostics, "output format is not configured");
}

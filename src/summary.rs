use crate::config::Config;
use crate::error::SummaryError;
use crate::report::{load_report, FileLintResult, LintReport};
use std::io::Write;

/// One line per result with errors, in report order.
pub fn summary_lines(report: LintReport) -> impl Iterator<Item = String> {
    report
        .into_results()
        .filter(FileLintResult::has_errors)
        .map(|result| format_line(&result))
}

/// Counts are printed verbatim, without pluralization ("1 errors").
pub fn format_line(result: &FileLintResult) -> String {
    format!(
        "{}: {} errors, {} warnings",
        result.file_path, result.error_count, result.warning_count
    )
}

/// Read the report named by `config` and write its summary to `out`.
/// Returns the number of lines written.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize, SummaryError> {
    if config.verbose {
        eprintln!("Reading: {}", config.input_path.display());
    }

    let report = load_report(&config.input_path)?;

    if config.verbose {
        eprintln!("Parsed {} file results", report.results.len());
    }

    let mut printed = 0;
    for line in summary_lines(report) {
        writeln!(out, "{line}")?;
        printed += 1;
    }

    if config.verbose {
        eprintln!("Summary complete: {printed} files with errors");
    }

    Ok(printed)
}

/// Print the failure line. A broken `out` is tolerated so the run still
/// ends normally.
pub fn report_failure<W: Write>(err: &SummaryError, out: &mut W) {
    let _ = writeln!(out, "{err}");
}

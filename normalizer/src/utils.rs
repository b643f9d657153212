use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::Error;
use normalizer_pipeline::pipeline::{self, FileReport, LineFailure};
use std::io::{stdin, Read};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_PATH, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_FAILURE,
            Style::new().foreground(term::color::BRIGHT_RED),
        );
        stylus.insert_style(
            STYLE_SUMMARY,
            Style::new().foreground(252).attribute(term::Attr::Bold),
        );
    }

    stylus
}

pub(crate) fn read_text_from_stdin() -> Result<String, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let s = String::from_utf8(buf)?;
    Ok(s)
}

pub(crate) fn print_failures(failures: &[LineFailure], stylus: &Stylus) {
    stylus.set(STYLE_FAILURE);
    failures
        .iter()
        .for_each(|f| println!("  skipped {}", f));
}

pub(crate) fn print_report(report: &FileReport, stylus: &Stylus) {
    stylus.set(STYLE_PATH);
    println!(
        "{} -> {}",
        report.job.input().display(),
        report.job.output().display()
    );

    print_failures(&report.failures, stylus);

    stylus.set(STYLE_INFO);
    println!(
        "  {} of {} lines written.",
        report.written, report.read
    );
}

pub(crate) fn print_error(error: &pipeline::Error, stylus: &Stylus) {
    stylus.set(STYLE_FAILURE);
    println!("{}", error);
}

/// Prints every outcome in `results` and returns the number of failed files.
pub(crate) fn print_results(
    results: &[Result<FileReport, pipeline::Error>],
    stylus: &Stylus,
) -> usize {
    let mut failed = 0;
    for result in results {
        match result {
            Ok(report) => print_report(report, stylus),
            Err(error) => {
                failed += 1;
                print_error(error, stylus);
            }
        }
    }

    let skipped: usize = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|r| r.failures.len())
        .sum();

    println!();
    stylus.set(STYLE_SUMMARY);
    println!(
        "{} files normalized, {} failed, {} lines skipped.",
        results.len() - failed,
        failed,
        skipped
    );
    failed
}

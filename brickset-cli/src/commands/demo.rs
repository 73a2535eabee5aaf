use std::fmt;

use brickset_catalog::{LegoSetRepository, QueryError};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

const DEMO_TAG: &str = "Microscale";
const DEMO_PIECE_LIMIT: u32 = 40;
const DEMO_SUM_THEME: &str = "Duplo";
const DEMO_LARGEST_THEME: &str = "Star Wars";

/// One line of the demonstration report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DemoLine {
    Heading(String),
    Text(String),
    Blank,
}

impl fmt::Display for DemoLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(s) | Self::Text(s) => f.write_str(s),
            Self::Blank => Ok(()),
        }
    }
}

/// Print the fixed demonstration report.
///
/// Everything before the largest-set line is printed even when that final
/// query finds nothing; the error is returned afterwards.
pub(crate) fn run_demo(repo: &LegoSetRepository) -> Result<(), CliError> {
    for line in report_lines(repo) {
        log_line(&line);
    }
    log_line(&largest_line(repo)?);
    Ok(())
}

/// The report up to and including the blank line after the piece sum.
pub(crate) fn report_lines(repo: &LegoSetRepository) -> Vec<DemoLine> {
    let mut lines = vec![
        DemoLine::Text(repo.count_with_tag(DEMO_TAG).to_string()),
        DemoLine::Blank,
        DemoLine::Heading("LEGO SETS ORDERED BY NAME:".to_string()),
    ];
    lines.extend(repo.names_sorted().into_iter().map(|n| DemoLine::Text(n.to_string())));
    lines.push(DemoLine::Blank);

    lines.push(DemoLine::Heading(format!(
        "LEGO SETS WITH THE UPPER PIECE LIMIT OF {}",
        DEMO_PIECE_LIMIT
    )));
    lines.extend(
        repo.names_under_piece_limit(DEMO_PIECE_LIMIT)
            .into_iter()
            .map(|n| DemoLine::Text(n.to_string())),
    );
    lines.push(DemoLine::Blank);

    lines.push(DemoLine::Heading("PACKAGING TYPES".to_string()));
    lines.extend(
        repo.packaging_types()
            .into_iter()
            .map(|p| DemoLine::Text(p.to_string())),
    );
    lines.push(DemoLine::Blank);

    lines.push(DemoLine::Text(format!(
        "AMOUNT OF PIECES IN {} THEMED LEGO SETS: {}",
        DEMO_SUM_THEME,
        repo.sum_pieces(DEMO_SUM_THEME),
    )));
    lines.push(DemoLine::Blank);
    lines
}

/// The closing line naming the largest set of the demo theme.
pub(crate) fn largest_line(repo: &LegoSetRepository) -> Result<DemoLine, QueryError> {
    let largest = repo.largest_in_theme(DEMO_LARGEST_THEME)?;
    Ok(DemoLine::Text(format!("LARGEST LEGO SET: {}", largest)))
}

fn log_line(line: &DemoLine) {
    match line {
        DemoLine::Heading(s) => log::info!("{}", s.if_supports_color(Stdout, |t| t.bold())),
        DemoLine::Text(s) => log::info!("{}", s),
        DemoLine::Blank => crate::log_blank(),
    }
}

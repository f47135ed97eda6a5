// src/presentation.rs
use crate::args::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets};
use lines_engine::{ScanReport, Tally};
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 7] = ["Language", "Files", "Code", "Mixed", "Comments", "Empty", "Total"];

/// Writes the report to stdout in the configured format.
///
/// # Errors
/// Fails when stdout is closed or JSON encoding fails.
pub fn print_report(report: &ScanReport, config: &Config) -> Result<()> {
    let rendered = match config.format {
        OutputFormat::Table => render_table(report, config.timing),
        OutputFormat::Json => render_json(report, config.timing)?,
    };
    let mut out = std::io::stdout().lock();
    writeln!(out, "{rendered}")?;
    Ok(())
}

pub fn render_table(report: &ScanReport, timing: bool) -> String {
    let mut rendered = if report.is_empty() {
        "No source files found".to_string()
    } else {
        summary_table(report).to_string()
    };

    if timing {
        rendered.push_str(&format!(
            "\nScanned {} files in {:.3}s",
            group_digits(report.files_dispatched),
            report.elapsed.as_secs_f64()
        ));
    }
    rendered
}

fn summary_table(report: &ScanReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADER);

    let rows = report.sorted();
    let multiple = rows.len() > 1;
    for (name, tally) in rows {
        table.add_row(row(name, tally));
    }
    if multiple {
        table.add_row(row("Totals:", &report.totals()));
    }

    for idx in 1..HEADER.len() {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

fn row(name: &str, tally: &Tally) -> Vec<Cell> {
    let mut cells = vec![Cell::new(name)];
    cells.extend(
        [
            tally.files(),
            tally.code(),
            tally.mixed(),
            tally.comments(),
            tally.empty(),
            tally.total(),
        ]
        .into_iter()
        .map(|n| Cell::new(group_digits(n))),
    );
    cells
}

/// `1234567` as `1,234,567`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Serialize)]
struct Counts {
    files: u64,
    total: u64,
    code: u64,
    line_comment: u64,
    block_comment: u64,
    mixed: u64,
    empty: u64,
}

impl From<&Tally> for Counts {
    fn from(tally: &Tally) -> Self {
        Self {
            files: tally.files(),
            total: tally.total(),
            code: tally.code(),
            line_comment: tally.line_comment(),
            block_comment: tally.block_comment(),
            mixed: tally.mixed(),
            empty: tally.empty(),
        }
    }
}

#[derive(Serialize)]
struct LanguageRow<'a> {
    language: &'a str,
    #[serde(flatten)]
    counts: Counts,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    languages: Vec<LanguageRow<'a>>,
    totals: Counts,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<u128>,
}

/// Pretty JSON with the same row order as the table.
///
/// # Errors
/// Returns the encoder's error, which does not happen for these types.
pub fn render_json(report: &ScanReport, timing: bool) -> Result<String> {
    let json = JsonReport {
        languages: report
            .sorted()
            .into_iter()
            .map(|(language, tally)| LanguageRow {
                language,
                counts: tally.into(),
            })
            .collect(),
        totals: (&report.totals()).into(),
        elapsed_ms: timing.then(|| report.elapsed.as_millis()),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

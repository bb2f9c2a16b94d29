//! Result table and summary rendering

use std::io::Write;

use serde::Serialize;

use super::format::{format_amount, format_percent};
use super::labels::{LabelKey, Labels};
use super::ReportError;
use crate::projection::{ProjectionResult, ProjectionSummary};

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a String>) -> usize {
    values
        .map(|v| v.chars().count())
        .fold(header.chars().count(), usize::max)
}

/// Render the per-period table; `max_rows` truncates long ledgers
pub fn render_table(result: &ProjectionResult, labels: &Labels, max_rows: Option<usize>) -> String {
    let period_h = labels.get(LabelKey::Period);
    let balance_h = labels.get(LabelKey::EndingBalance);
    let interest_h = labels.get(LabelKey::InterestEarned);

    let shown = max_rows.unwrap_or(result.rows.len()).min(result.rows.len());
    let cells: Vec<(String, String, String)> = result.rows[..shown]
        .iter()
        .map(|r| {
            (
                r.period_index.to_string(),
                format_amount(r.ending_balance),
                format_amount(r.interest_earned),
            )
        })
        .collect();

    let w_period = column_width(period_h, cells.iter().map(|c| &c.0));
    let w_balance = column_width(balance_h, cells.iter().map(|c| &c.1));
    let w_interest = column_width(interest_h, cells.iter().map(|c| &c.2));

    let mut lines = vec![
        labels.get(LabelKey::ResultsTable).to_string(),
        format!("{period_h:>w_period$}  {balance_h:>w_balance$}  {interest_h:>w_interest$}"),
        "-".repeat(w_period + w_balance + w_interest + 4),
    ];
    lines.extend(cells.iter().map(|(period, balance, interest)| {
        format!("{period:>w_period$}  {balance:>w_balance$}  {interest:>w_interest$}")
    }));

    if shown < result.rows.len() {
        lines.push(format!(
            "... ({} {})",
            result.rows.len() - shown,
            labels.get(LabelKey::MoreRows)
        ));
    }

    lines.join("\n") + "\n"
}

/// Render the three summary metrics
pub fn render_summary(summary: &ProjectionSummary, labels: &Labels) -> String {
    let metrics = [
        (LabelKey::FinalBalance, format_amount(summary.final_balance)),
        (LabelKey::TotalInterest, format_amount(summary.total_interest)),
        (LabelKey::TotalInterestPct, format_percent(summary.total_interest_pct)),
    ];

    let mut out = format!("{}\n", labels.get(LabelKey::Summary));
    for (key, value) in metrics {
        out.push_str(&format!("  {}: {}\n", labels.get(key), value));
    }
    out
}

#[derive(Serialize)]
struct CsvRow {
    period: u32,
    ending_balance: f64,
    interest_earned: f64,
}

/// Write the ledger as CSV with columns `period,ending_balance,interest_earned`
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &result.rows {
        csv_writer.serialize(CsvRow {
            period: row.period_index,
            ending_balance: row.ending_balance,
            interest_earned: row.interest_earned,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

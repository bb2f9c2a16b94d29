//! Text line chart of the balance over time

use super::format::format_amount;
use crate::projection::ProjectionResult;

/// `(period_index, ending_balance)` points in period order
pub fn growth_series(result: &ProjectionResult) -> Vec<(u32, f64)> {
    result
        .rows
        .iter()
        .map(|r| (r.period_index, r.ending_balance))
        .collect()
}

/// Render the balance series as a `width` x `height` character plot.
///
/// Long ledgers are sampled so each column shows the last period it covers.
pub fn render_chart(result: &ProjectionResult, width: usize, height: usize) -> String {
    let series = growth_series(result);
    if series.is_empty() || width == 0 || height == 0 {
        return String::new();
    }

    let columns = width.min(series.len());
    let samples: Vec<(u32, f64)> = (0..columns)
        .map(|c| series[((c + 1) * series.len()).div_ceil(columns) - 1])
        .collect();

    let min = samples.iter().map(|s| s.1).fold(f64::INFINITY, f64::min);
    let max = samples.iter().map(|s| s.1).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    // Row 0 is the top of the plot
    let level = |value: f64| -> usize {
        if span <= 0.0 {
            return height - 1;
        }
        let scaled = ((max - value) / span * (height - 1) as f64).round() as usize;
        scaled.min(height - 1)
    };

    let mut grid = vec![vec![' '; columns]; height];
    for (c, &(_, value)) in samples.iter().enumerate() {
        grid[level(value)][c] = '*';
    }

    let top = format_amount(max);
    let bottom = format_amount(min);
    let axis_width = top.len().max(bottom.len());

    let mut out = String::new();
    for (r, line) in grid.iter().enumerate() {
        let axis = match r {
            0 => top.as_str(),
            r if r == height - 1 => bottom.as_str(),
            _ => "",
        };
        let row: String = line.iter().collect();
        out.push_str(&format!("{:>axis_width$} |{}\n", axis, row.trim_end()));
    }
    out.push_str(&format!("{:>axis_width$} +{}\n", "", "-".repeat(columns)));
    let first = samples[0].0.to_string();
    let last = samples[columns - 1].0.to_string();
    let gap = columns.saturating_sub(first.len() + last.len()).max(1);
    out.push_str(&format!("{:>axis_width$}  {}{}{}\n", "", first, " ".repeat(gap), last));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn test_growth_series() {
        let result = project(500.0, 0.0, 50.0, 4).unwrap();
        assert_eq!(
            growth_series(&result),
            vec![(1, 550.0), (2, 600.0), (3, 650.0), (4, 700.0)]
        );
    }

    #[test]
    fn test_chart_rises_left_to_right() {
        let result = project(500.0, 0.0, 50.0, 4).unwrap();
        let chart = render_chart(&result, 40, 4);
        let lines: Vec<&str> = chart.lines().collect();

        // 4 plot rows, axis, period labels
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("700.00 |"));
        assert!(lines[0].ends_with("   *"));
        assert!(lines[3].starts_with("550.00 |*"));
        assert!(lines[5].trim_start().starts_with('1'));
        assert!(lines[5].ends_with('4'));
    }

    #[test]
    fn test_chart_samples_long_ledgers() {
        let result = project(1000.0, 0.01, 0.0, 360).unwrap();
        let chart = render_chart(&result, 60, 10);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 12);
        // Last column is the final period
        assert!(lines[11].ends_with("360"));
        assert!(lines[0].contains(&format_amount(result.final_balance)));
    }

    #[test]
    fn test_flat_series() {
        let result = project(100.0, 0.0, 0.0, 5).unwrap();
        let chart = render_chart(&result, 10, 3);
        let lines: Vec<&str> = chart.lines().collect();
        assert!(lines[2].ends_with("|*****"));
    }
}

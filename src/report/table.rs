//! Grid table renderer for terminal output.

use crate::model::wrap::reflow;

use super::{Renderer, Report, DETAIL_HEADERS, SUMMARY_HEADERS};

/// Column widths used when reflowing wide detail cells.
const ID_WRAP_WIDTH: usize = 70;
const SOURCE_WRAP_WIDTH: usize = 40;

/// Human-readable grid table renderer.
///
/// Draws a bordered grid per table, first column right-aligned, and
/// reflows the resource id and source columns of the detail view so
/// long ids and accumulated source lists stay readable.
pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn name(&self) -> &'static str {
        "table"
    }

    fn render(&self, report: &Report) -> String {
        let mut output = String::new();

        let summary: Vec<Vec<String>> = report
            .summary
            .iter()
            .map(|(label, value)| vec![label.clone(), value.clone()])
            .collect();
        output.push_str(&draw_grid(&SUMMARY_HEADERS, &summary));

        if let Some(details) = &report.details {
            output.push('\n');
            output.push_str(&"-".repeat(80));
            output.push_str("\n\n");

            let rows: Vec<Vec<String>> = details
                .iter()
                .map(|row| {
                    vec![
                        row.category.to_string(),
                        reflow(&row.id, ID_WRAP_WIDTH),
                        row.resource_type.clone(),
                        row.region.clone(),
                        row.account_id.clone(),
                        reflow(&row.source, SOURCE_WRAP_WIDTH),
                    ]
                })
                .collect();
            output.push_str(&draw_grid(&DETAIL_HEADERS, &rows));
        }

        output
    }
}

/// Draw one bordered grid. Cells may span multiple lines; the first
/// column is right-aligned, every other column left-aligned.
fn draw_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            for line in cell.split('\n') {
                widths[i] = widths[i].max(line.chars().count());
            }
        }
    }

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut output = String::new();
    output.push_str(&border(&widths, '╒', '╤', '╕', '═'));
    output.push_str(&cells(&header_row, &widths));
    output.push_str(&border(&widths, '╞', '╪', '╡', '═'));

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            output.push_str(&border(&widths, '├', '┼', '┤', '─'));
        }
        output.push_str(&cells(row, &widths));
    }

    output.push_str(&border(&widths, '╘', '╧', '╛', '═'));
    output
}

fn border(widths: &[usize], left: char, mid: char, right: char, fill: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.extend(std::iter::repeat(fill).take(width + 2));
    }
    line.push(right);
    line.push('\n');
    line
}

/// Render one logical row, padding multi-line cells to equal height.
fn cells(row: &[String], widths: &[usize]) -> String {
    let split: Vec<Vec<&str>> = row.iter().map(|cell| cell.split('\n').collect()).collect();
    let height = split.iter().map(|lines| lines.len()).max().unwrap_or(1);

    let mut output = String::new();
    for line_no in 0..height {
        output.push('│');
        for (i, width) in widths.iter().enumerate() {
            let text = split
                .get(i)
                .and_then(|lines| lines.get(line_no))
                .copied()
                .unwrap_or("");
            let pad = width.saturating_sub(text.chars().count());
            if i == 0 {
                // Right-align the first column.
                output.push(' ');
                output.extend(std::iter::repeat(' ').take(pad));
                output.push_str(text);
                output.push(' ');
            } else {
                output.push(' ');
                output.push_str(text);
                output.extend(std::iter::repeat(' ').take(pad));
                output.push(' ');
            }
            output.push('│');
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DetailRow;

    fn report(with_details: bool) -> Report {
        Report {
            summary: vec![
                ("Coverage".to_string(), "50%".to_string()),
                ("Found resource(s)".to_string(), "2".to_string()),
            ],
            details: with_details.then(|| {
                vec![DetailRow {
                    category: "Unmanaged",
                    id: "u1".to_string(),
                    resource_type: "aws_s3_bucket".to_string(),
                    region: "us-east-1".to_string(),
                    account_id: "111122223333".to_string(),
                    source: "fileA, fileB".to_string(),
                }]
            }),
        }
    }

    #[test]
    fn test_summary_only() {
        let rendered = TableRenderer.render(&report(false));
        assert!(rendered.contains("Summary"));
        assert!(rendered.contains("Coverage"));
        assert!(rendered.contains("50%"));
        assert!(!rendered.contains("Category"));
    }

    #[test]
    fn test_detail_table_after_separator() {
        let rendered = TableRenderer.render(&report(true));
        let separator = "-".repeat(80);
        let detail_at = rendered.find("Category").unwrap();
        let separator_at = rendered.find(&separator).unwrap();
        assert!(separator_at < detail_at);
        assert!(rendered.contains("Unmanaged"));
        assert!(rendered.contains("fileA, fileB"));
    }

    #[test]
    fn test_long_source_is_reflowed() {
        let mut report = report(true);
        report.details.as_mut().unwrap()[0].source =
            "./very/long/path/one/result.json, ./very/long/path/two/result.json".to_string();
        let rendered = TableRenderer.render(&report);
        // Both labels survive, split across grid lines.
        assert!(rendered.contains("./very/long/path/one/result.json,"));
        assert!(rendered.contains("./very/long/path/two/result.json"));
    }
}

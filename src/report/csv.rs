//! CSV renderer.

use super::{DetailRow, Renderer, Report, DETAIL_HEADERS, SUMMARY_HEADERS};

/// Delimited text renderer sharing the table backend's row contract.
///
/// Fields are quoted when they contain a comma, quote or newline, which
/// the accumulated source lists always do past one contributing file.
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &Report) -> String {
        let mut output = String::new();

        push_row(&mut output, &SUMMARY_HEADERS.map(String::from));
        for (label, value) in &report.summary {
            push_row(&mut output, &[label.clone(), value.clone()]);
        }

        if let Some(details) = &report.details {
            output.push('\n');
            push_row(&mut output, &DETAIL_HEADERS.map(String::from));
            for row in details {
                push_row(&mut output, &detail_fields(row));
            }
        }

        output
    }
}

fn detail_fields(row: &DetailRow) -> [String; 6] {
    [
        row.category.to_string(),
        row.id.clone(),
        row.resource_type.clone(),
        row.region.clone(),
        row.account_id.clone(),
        row.source.clone(),
    ]
}

fn push_row(output: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(&escape(field));
    }
    output.push('\n');
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rows() {
        let report = Report {
            summary: vec![
                ("Coverage".to_string(), "2%".to_string()),
                ("Found resource(s)".to_string(), "73".to_string()),
            ],
            details: None,
        };

        let rendered = CsvRenderer.render(&report);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Summary,count");
        assert_eq!(lines[1], "Coverage,2%");
        assert_eq!(lines[2], "Found resource(s),73");
    }

    #[test]
    fn test_multi_source_field_is_quoted() {
        let report = Report {
            summary: vec![],
            details: Some(vec![DetailRow {
                category: "Missing",
                id: "x".to_string(),
                resource_type: "t".to_string(),
                region: "r".to_string(),
                account_id: "a".to_string(),
                source: "fileA, fileB".to_string(),
            }]),
        };

        let rendered = CsvRenderer.render(&report);
        assert!(rendered.contains(r#"Missing,x,t,r,a,"fileA, fileB""#));
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(escape(r#"a"b"#), r#""a""b""#);
        assert_eq!(escape("plain"), "plain");
    }
}

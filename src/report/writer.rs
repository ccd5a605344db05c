//! Report output targets.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::logging::LogContext;

use super::ReportFormat;

/// Where the rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Write a rendered report to its target.
///
/// A CSV file target gets a `.csv` extension appended when missing. A
/// file that cannot be created is reported and the output falls back to
/// stdout rather than being lost.
pub fn write_report(
    rendered: &str,
    target: &OutputTarget,
    format: ReportFormat,
    ctx: &LogContext,
) -> io::Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()
        }
        OutputTarget::File(path) => {
            let path = output_path(path, format);
            match File::create(&path) {
                Ok(mut file) => {
                    log::info!("{} REPORT_WRITTEN path={:?}", ctx, path);
                    file.write_all(rendered.as_bytes())
                }
                Err(e) => {
                    log::warn!(
                        "{} REPORT_FILE_UNWRITABLE path={:?} error={} falling back to stdout",
                        ctx,
                        path,
                        e
                    );
                    write_report(rendered, &OutputTarget::Stdout, format, ctx)
                }
            }
        }
    }
}

/// Effective output path for a file target.
fn output_path(path: &Path, format: ReportFormat) -> PathBuf {
    if format != ReportFormat::Csv {
        return path.to_path_buf();
    }

    let has_csv_ext = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if has_csv_ext {
        path.to_path_buf()
    } else {
        let mut named = path.as_os_str().to_os_string();
        named.push(".csv");
        PathBuf::from(named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_csv_extension_appended() {
        assert_eq!(
            output_path(Path::new("report"), ReportFormat::Csv),
            PathBuf::from("report.csv")
        );
        assert_eq!(
            output_path(Path::new("report.CSV"), ReportFormat::Csv),
            PathBuf::from("report.CSV")
        );
        assert_eq!(
            output_path(Path::new("report.txt"), ReportFormat::Table),
            PathBuf::from("report.txt")
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out");
        let ctx = LogContext::new("test");

        write_report("Summary,count\n", &OutputTarget::File(path.clone()), ReportFormat::Csv, &ctx)
            .unwrap();

        let written = fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(written, "Summary,count\n");
    }

    #[test]
    fn test_unwritable_file_falls_back_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out");
        let ctx = LogContext::new("test");

        // Falls back to stdout instead of erroring.
        let result = write_report("x\n", &OutputTarget::File(path), ReportFormat::Table, &ctx);
        assert!(result.is_ok());
    }
}

//! Saving generated Markdown reports.

use std::path::{Path, PathBuf};

use pocket_api::chat::GenerateReportResponse;

use crate::error::ChatError;

const DEFAULT_TITLE: &str = "laneige_report";

/// `<title>_<report_id>.md`, with characters illegal in file names replaced
/// by `-` in both parts. A missing or blank title becomes `laneige_report`.
#[must_use]
pub fn report_file_name(title: Option<&str>, report_id: &str) -> String {
    let title = title.map(str::trim).filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE);
    format!("{}_{}.md", file_safe(title), file_safe(report_id))
}

fn file_safe(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Write the report body into `dir` and return its path.
///
/// # Errors
///
/// Returns [`ChatError::Io`] if the directory or file cannot be written.
pub fn save_report(dir: &Path, report: &GenerateReportResponse) -> Result<PathBuf, ChatError> {
    let path = dir.join(report_file_name(report.title.as_deref(), &report.report_id));
    let io = |source| ChatError::Io {
        path: path.clone(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(io)?;
    std::fs::write(&path, &report.body_md).map_err(io)?;
    tracing::info!(path = %path.display(), "report saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("1월 매출 분석"), "1월 매출 분석_r-1.md")]
    #[case(Some("  Lip: care / Q1?  "), "Lip- care - Q1-_r-1.md")]
    #[case(Some("   "), "laneige_report_r-1.md")]
    #[case(None, "laneige_report_r-1.md")]
    fn file_names(#[case] title: Option<&str>, #[case] expected: &str) {
        assert_eq!(report_file_name(title, "r-1"), expected);
    }

    #[rstest]
    #[case("2025/01/r-9", "주간_2025-01-r-9.md")]
    #[case("../../etc/r-9", "주간_..-..-etc-r-9.md")]
    #[case("..\\r-9", "주간_..-r-9.md")]
    fn report_id_stays_one_path_component(#[case] report_id: &str, #[case] expected: &str) {
        assert_eq!(report_file_name(Some("주간"), report_id), expected);
    }

    #[test]
    fn slashed_report_id_saves_inside_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let report = GenerateReportResponse {
            report_id: "2025/01/r-9".into(),
            body_md: "# 리포트".into(),
            title: None,
        };
        let path = save_report(tmp.path(), &report).unwrap();
        assert_eq!(path, tmp.path().join("laneige_report_2025-01-r-9.md"));
        assert_eq!(path.parent(), Some(tmp.path()));
    }

    #[test]
    fn saves_body_into_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("reports");
        let report = GenerateReportResponse {
            report_id: "r-9".into(),
            body_md: "# 리포트\n\n매출이 늘었어요.".into(),
            title: Some("주간 리포트".into()),
        };
        let path = save_report(&dir, &report).unwrap();
        assert_eq!(path, dir.join("주간 리포트_r-9.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), report.body_md);
    }
}

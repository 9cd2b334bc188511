//! Report filename resolution from `Content-Disposition`.

use regex::Regex;
use std::sync::LazyLock;

/// Used when the header is missing or carries no `filename=`.
pub const DEFAULT_REPORT_FILENAME: &str = "loan_application_report.png";

static FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="?(.+)"?"#).expect("filename pattern"));

/// Filename for a downloaded report.
///
/// `attachment; filename="a.png"` and `attachment; filename=a.png` both give `a.png`.
pub fn report_filename(content_disposition: Option<&str>) -> String {
    content_disposition
        .and_then(|header| FILENAME.captures(header))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('"').to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_REPORT_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_uses_default() {
        assert_eq!(report_filename(None), "loan_application_report.png");
    }

    #[test]
    fn test_unparseable_header_uses_default() {
        assert_eq!(report_filename(Some("attachment")), DEFAULT_REPORT_FILENAME);
        assert_eq!(report_filename(Some("attachment; filename=\"\"")), DEFAULT_REPORT_FILENAME);
    }

    #[test]
    fn test_bare_and_quoted_filenames() {
        assert_eq!(
            report_filename(Some("attachment; filename=loan_report_20250101_120000.png")),
            "loan_report_20250101_120000.png"
        );
        assert_eq!(
            report_filename(Some("attachment; filename=\"report.png\"")),
            "report.png"
        );
    }
}

//! Markdown reports returned by the report endpoints.

use chrono::NaiveDate;

/// Which page a report was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Planning,
    Trends,
    Viral,
    Analytics,
}

impl ReportKind {
    /// File name prefix, matching what the web client downloads.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ReportKind::Planning => "企画案レポート",
            ReportKind::Trends => "トレンド分析レポート",
            ReportKind::Viral => "バイラル動画レポート",
            ReportKind::Analytics => "アナリティクスレポート",
        }
    }
}

/// A downloaded markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownReport {
    pub kind: ReportKind,
    pub file_name: String,
    pub body: String,
}

impl MarkdownReport {
    /// Name the report after its kind and the given date.
    pub fn dated(kind: ReportKind, date: NaiveDate, body: String) -> Self {
        Self {
            kind,
            file_name: format!("{}_{}.md", kind.file_prefix(), date.format("%Y-%m-%d")),
            body,
        }
    }

    /// Name the report after today's local date.
    pub fn today(kind: ReportKind, body: String) -> Self {
        Self::dated(kind, chrono::Local::now().date_naive(), body)
    }
}

//! Report rendering: compiled statistics to in-memory report pages.
//!
//! Nothing here computes stats or touches the filesystem; pages are returned
//! as (title, file name, content) for an external writer to persist.

pub mod csv_export;
pub mod html;

pub use html::HtmlReportGenerator;

/// One rendered report page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportPage {
    pub title: String,
    /// Suggested file name; also the target of cross-page links.
    pub file_name: String,
    pub content: String,
}

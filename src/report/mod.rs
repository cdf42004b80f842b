//! Markdown review reports.

pub mod summary;
pub mod template;
pub mod writer;

pub use summary::build_review_summary;
pub use template::{REPORT_FOOTER, REPORT_TITLE, render_report};
pub use writer::{FsWriter, TextWriter, WriteResult, report_path, write_report};

use crate::common::*;

use crate::errors::report_error::*;

#[async_trait]
pub trait ReportService {
    async fn render_report_body(&self, report_file: &str) -> Result<String, ReportError>;
    async fn render_report_preview(
        &self,
        report_file: &str,
        max_rows: usize,
    ) -> Result<String, ReportError>;
}

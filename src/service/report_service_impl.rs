use crate::common::*;

use crate::errors::report_error::*;
use crate::model::report::report_table::*;
use crate::traits::service_traits::report_service::*;

#[derive(Debug, new)]
pub struct ReportServiceImpl;

#[async_trait]
impl ReportService for ReportServiceImpl {
    #[doc = "보고서 CSV 파일을 읽어 이메일 본문 텍스트로 렌더링하는 함수"]
    async fn render_report_body(&self, report_file: &str) -> Result<String, ReportError> {
        let table: ReportTable = ReportTable::from_csv_path(report_file)?;
        Ok(table.to_plain_text())
    }

    #[doc = "보고서 앞부분 일부 행만 렌더링하는 함수"]
    async fn render_report_preview(
        &self,
        report_file: &str,
        max_rows: usize,
    ) -> Result<String, ReportError> {
        let table: ReportTable = ReportTable::from_csv_path(report_file)?;
        Ok(table.preview(max_rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn render_body_fails_with_report_unreadable_for_missing_file() {
        let service = ReportServiceImpl::new();

        let result = service.render_report_body("missing/report.csv").await;
        assert!(matches!(
            result,
            Err(ReportError::ReportUnreadable { .. })
        ));
    }

    #[tokio::test]
    async fn render_preview_limits_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, "name,count\na,1\nb,2\nc,3\n").unwrap();

        let service = ReportServiceImpl::new();
        let preview = service
            .render_report_preview(path.to_str().unwrap(), 1)
            .await
            .unwrap();

        assert_eq!(preview.lines().count(), 2);
    }
}

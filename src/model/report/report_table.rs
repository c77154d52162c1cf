use crate::common::*;

use crate::errors::report_error::*;

#[doc = r#"
    이메일 본문이 되는 보고서 테이블.

    헤더가 있는 CSV 파일을 메모리에 전부 읽어온 뒤, 고정폭 일반 텍스트로
    렌더링한다. 컬럼 폭은 각 컬럼에서 가장 긴 값에 맞추며 잘라내지 않는다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    #[doc = "CSV 보고서 파일을 읽어서 테이블로 파싱하는 함수. 파일이 없거나 형식이 깨진 경우 ReportUnreadable 로 실패한다."]
    pub fn from_csv_path(file_path: &str) -> Result<Self, ReportError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(file_path)
            .map_err(|e| ReportError::unreadable(file_path, e))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ReportError::unreadable(file_path, e))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ReportError::unreadable(file_path, e))?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(ReportTable::new(headers, rows))
    }

    #[doc = "테이블 전체를 고정폭 텍스트로 렌더링하는 함수"]
    pub fn to_plain_text(&self) -> String {
        self.render_rows(self.rows.len())
    }

    #[doc = "테이블의 앞부분 일부 행만 렌더링하는 함수 (미리보기용)"]
    pub fn preview(&self, max_rows: usize) -> String {
        self.render_rows(max_rows)
    }

    fn render_rows(&self, limit: usize) -> String {
        let column_count: usize = self
            .rows
            .iter()
            .take(limit)
            .map(|row| row.len())
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        if column_count == 0 {
            return String::new();
        }

        /* 컬럼 폭: 헤더와 모든 셀 중 가장 긴 값 */
        let mut widths: Vec<usize> = vec![0; column_count];
        for (idx, width) in widths.iter_mut().enumerate() {
            let header_len: usize = self
                .headers
                .get(idx)
                .map(|h| h.chars().count())
                .unwrap_or(0);

            let cell_len: usize = self
                .rows
                .iter()
                .take(limit)
                .map(|row| row.get(idx).map(|cell| cell.chars().count()).unwrap_or(0))
                .max()
                .unwrap_or(0);

            *width = header_len.max(cell_len);
        }

        let mut lines: Vec<String> = Vec::new();
        lines.push(Self::render_line(&self.headers, &widths, column_count));

        for row in self.rows.iter().take(limit) {
            lines.push(Self::render_line(row, &widths, column_count));
        }

        lines.join("\n")
    }

    fn render_line(cells: &[String], widths: &[usize], column_count: usize) -> String {
        (0..column_count)
            .map(|idx| {
                let cell: &str = cells.get(idx).map(|c| c.as_str()).unwrap_or("");
                format!("{:>w$}", cell, w = widths[idx])
            })
            .collect::<Vec<String>>()
            .join("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(content: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, content).unwrap();
        let path_str = path.to_str().unwrap().to_string();
        (dir, path_str)
    }

    #[test]
    fn parses_headered_csv_into_table() {
        let (_dir, path) = write_csv("name,count\nalpha,1\nbeta,22\ngamma,333\n");
        let table = ReportTable::from_csv_path(&path).unwrap();

        assert_eq!(table.headers, vec!["name", "count"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[2], vec!["gamma", "333"]);
    }

    #[test]
    fn missing_file_is_report_unreadable() {
        let result = ReportTable::from_csv_path("does/not/exist.csv");

        assert!(matches!(
            result,
            Err(ReportError::ReportUnreadable { .. })
        ));
    }

    #[test]
    fn renders_fixed_width_right_aligned_without_truncation() {
        let (_dir, path) = write_csv("name,count\nalpha,1\nvery-long-value,22\n");
        let table = ReportTable::from_csv_path(&path).unwrap();

        let text = table.to_plain_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "           name  count");
        assert_eq!(lines[1], "          alpha      1");
        assert_eq!(lines[2], "very-long-value     22");
    }

    #[test]
    fn preview_caps_row_count() {
        let (_dir, path) = write_csv("name\na\nb\nc\nd\n");
        let table = ReportTable::from_csv_path(&path).unwrap();

        let preview = table.preview(2);
        assert_eq!(preview.lines().count(), 3); /* 헤더 + 2행 */
        let full = table.to_plain_text();
        assert_eq!(full.lines().count(), 5);
    }

    #[test]
    fn ragged_rows_are_padded_not_rejected() {
        let (_dir, path) = write_csv("a,b,c\n1,2\n1,2,3,4\n");
        let table = ReportTable::from_csv_path(&path).unwrap();

        let text = table.to_plain_text();
        assert_eq!(text.lines().count(), 3);
    }
}

use crate::common::*;

use crate::enums::chart_kind::*;

use crate::errors::visualization_error::*;

use crate::model::table::column_summary::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn numeric(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            data: ColumnData::Numeric(values),
        }
    }

    pub fn text(name: &str, values: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            data: ColumnData::Text(values),
        }
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Numeric(_))
    }

    pub fn numeric_values(&self) -> Option<&[f64]> {
        match &self.data {
            ColumnData::Numeric(values) => Some(values),
            ColumnData::Text(_) => None,
        }
    }

    #[doc = "산술평균. 숫자 컬럼이 아니거나 행이 없으면 None"]
    pub fn mean(&self) -> Option<f64> {
        let values: &[f64] = self.numeric_values()?;

        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    #[doc = "x축 카테고리 라벨로 사용할 i번째 셀의 문자열 표현"]
    pub fn label_at(&self, idx: usize) -> String {
        match &self.data {
            ColumnData::Text(values) => values.get(idx).cloned().unwrap_or_default(),
            ColumnData::Numeric(values) => values
                .get(idx)
                .map(|v| format_cell_number(*v))
                .unwrap_or_default(),
        }
    }
}

#[doc = r#"
    스프레드시트에서 가져온 사각형 형태의 표.

    - 모든 컬럼의 길이가 같다
    - 컬럼명은 중복되지 않는다
    - 첫 번째 컬럼이 카테고리(x축) 컬럼이다
    - 생성 이후에는 변경하지 않는다
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct DataTable {
    columns: Vec<Column>,
}

impl DataTable {
    pub fn new(columns: Vec<Column>) -> Result<Self, VisualizationError> {
        let expected: usize = columns.first().map(Column::len).unwrap_or(0);

        for (idx, column) in columns.iter().enumerate() {
            if column.len() != expected {
                return Err(VisualizationError::ColumnLengthMismatch {
                    column: column.name.clone(),
                    expected,
                    actual: column.len(),
                });
            }

            if columns[..idx].iter().any(|prev| prev.name == column.name) {
                return Err(VisualizationError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }

        Ok(Self { columns })
    }

    #[doc = r#"
        Google Sheets values API 의 `values` 2차원 배열을 표로 변환하는 함수.

        1. 첫 행을 헤더로 사용하고 뒤쪽의 빈 헤더 셀은 버린다
        2. 나머지 행을 레코드로 사용하며, 짧은 행은 빈 셀로 채운다. 완전히 빈 행은 건너뛴다
        3. 모든 셀이 숫자(또는 숫자 문자열)인 컬럼은 숫자 컬럼, 그 외는 텍스트 컬럼

        # Errors
        헤더나 레코드가 하나도 없으면 `EmptyData`
    "#]
    pub fn from_sheet_values(
        worksheet_name: &str,
        rows: &[Vec<Value>],
    ) -> Result<Self, VisualizationError> {
        let empty_data = || VisualizationError::EmptyData {
            worksheet: worksheet_name.to_string(),
        };

        let (header_row, record_rows) = rows.split_first().ok_or_else(empty_data)?;

        let mut headers: Vec<String> = header_row.iter().map(cell_to_string).collect();
        while headers.last().is_some_and(|h| h.trim().is_empty()) {
            headers.pop();
        }

        if headers.is_empty() {
            return Err(empty_data());
        }

        let records: Vec<&Vec<Value>> = record_rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell_to_string(cell).trim().is_empty()))
            .collect();

        if records.is_empty() {
            return Err(empty_data());
        }

        let blank: Value = Value::String(String::new());

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(col_idx, header)| {
                let name: String = if header.trim().is_empty() {
                    format!("Unnamed: {}", col_idx)
                } else {
                    header.trim().to_string()
                };

                let cells: Vec<&Value> = records
                    .iter()
                    .map(|row| row.get(col_idx).unwrap_or(&blank))
                    .collect();

                let parsed: Option<Vec<f64>> = cells.iter().map(|c| parse_numeric_cell(c)).collect();

                match parsed {
                    Some(values) => Column::numeric(&name, values),
                    None => Column::text(&name, cells.iter().map(|c| cell_to_string(c)).collect()),
                }
            })
            .collect();

        Self::new(columns)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn first_column(&self) -> Option<&Column> {
        self.columns.first()
    }

    #[doc = "숫자 컬럼들을 표의 컬럼 순서대로 반환"]
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }

    #[doc = "차트 종류 정보를 포함한 오류와 함께 숫자 컬럼 값을 조회"]
    pub fn require_numeric(
        &self,
        name: &str,
        kind: ChartKind,
    ) -> Result<&[f64], VisualizationError> {
        let column: &Column = self.require_column(name, kind)?;

        column
            .numeric_values()
            .ok_or_else(|| VisualizationError::NonNumericColumn {
                column: name.to_string(),
                kind,
            })
    }

    pub fn require_column(&self, name: &str, kind: ChartKind) -> Result<&Column, VisualizationError> {
        self.column(name)
            .ok_or_else(|| VisualizationError::ColumnNotFound {
                column: name.to_string(),
                kind,
            })
    }

    #[doc = "x축 카테고리 라벨 목록"]
    pub fn category_labels(
        &self,
        name: &str,
        kind: ChartKind,
    ) -> Result<Vec<String>, VisualizationError> {
        let column: &Column = self.require_column(name, kind)?;
        Ok((0..column.len()).map(|idx| column.label_at(idx)).collect())
    }

    #[doc = "숫자 컬럼별 기술통계"]
    pub fn summaries(&self) -> Vec<ColumnSummary> {
        self.numeric_columns()
            .into_iter()
            .filter_map(|c| ColumnSummary::from_values(&c.name, c.numeric_values().unwrap_or(&[])))
            .collect()
    }

    #[doc = r#"
        숫자 컬럼들의 기술통계를 사람이 읽을 수 있는 표 형태 문자열로 만들어주는 함수.
        LLM 에 차트 추천을 요청할 때 데이터 요약으로 사용한다.
    "#]
    pub fn describe(&self) -> String {
        let summaries: Vec<ColumnSummary> = self.summaries();

        if summaries.is_empty() {
            return String::from("(no numeric columns)");
        }

        let widths: Vec<usize> = summaries.iter().map(|s| s.name().len().max(12)).collect();

        let mut out: String = format!("{:<6}", "");
        for (summary, width) in summaries.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", summary.name(), width = width));
        }
        out.push('\n');

        for row_idx in 0..8 {
            let label: &str = summaries[0].stat_rows()[row_idx].0;
            out.push_str(&format!("{:<6}", label));

            for (summary, width) in summaries.iter().zip(&widths) {
                let value: f64 = summary.stat_rows()[row_idx].1;
                out.push_str(&format!("  {:>width$.2}", value, width = width));
            }
            out.push('\n');
        }

        out
    }

    #[doc = "앞쪽 n 개 행 미리보기 (탭 구분)"]
    pub fn preview(&self, rows: usize) -> String {
        let mut out: String = self.column_names().join("\t");

        for idx in 0..rows.min(self.row_count()) {
            out.push('\n');
            let line: Vec<String> = self.columns.iter().map(|c| c.label_at(idx)).collect();
            out.push_str(&line.join("\t"));
        }

        out
    }
}

#[doc = "셀 값이 숫자로 해석되면 Some. 천 단위 구분기호(,)는 무시한다."]
fn parse_numeric_cell(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(num) => num.as_f64(),
        Value::String(raw) => {
            let cleaned: String = raw.trim().replace(',', "");
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn format_cell_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

use crate::common::*;

use crate::enums::chart_kind::*;

use crate::errors::visualization_error::*;

use crate::model::table::data_table::*;

#[doc = r#"
    렌더러가 그릴 차트의 종류와 축 배정 정보.
    로컬 판별기와 LLM 추천 어느 쪽에서 만들어졌든 렌더링 전에 `validate` 를 통과해야 한다.
"#]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar {
        x_column: String,
        y_column: String,
    },
    Line {
        x_column: String,
        y_columns: Vec<String>,
    },
    DualAxis {
        x_column: String,
        y1_column: String,
        y2_column: String,
        y1_label: String,
        y2_label: String,
    },
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Bar { .. } => ChartKind::Bar,
            ChartSpec::Line { .. } => ChartKind::Line,
            ChartSpec::DualAxis { .. } => ChartKind::DualAxis,
        }
    }

    pub fn x_column(&self) -> &str {
        match self {
            ChartSpec::Bar { x_column, .. }
            | ChartSpec::Line { x_column, .. }
            | ChartSpec::DualAxis { x_column, .. } => x_column,
        }
    }

    pub fn y_columns(&self) -> Vec<&str> {
        match self {
            ChartSpec::Bar { y_column, .. } => vec![y_column.as_str()],
            ChartSpec::Line { y_columns, .. } => y_columns.iter().map(String::as_str).collect(),
            ChartSpec::DualAxis {
                y1_column,
                y2_column,
                ..
            } => vec![y1_column.as_str(), y2_column.as_str()],
        }
    }

    #[doc = r#"
        차트 명세가 주어진 표에 대해 그릴 수 있는 상태인지 검증하는 함수.

        1. Line 차트의 y 컬럼 목록이 비어있으면 `InvalidChartSpec`
        2. DualAxis 차트의 두 y 컬럼이 같으면 `InvalidChartSpec`
        3. x / y 컬럼이 표에 없으면 `ColumnNotFound`
        4. y 컬럼이 숫자 컬럼이 아니면 `NonNumericColumn`
    "#]
    pub fn validate(&self, table: &DataTable) -> Result<(), VisualizationError> {
        let kind: ChartKind = self.kind();

        match self {
            ChartSpec::Line { y_columns, .. } if y_columns.is_empty() => {
                return Err(VisualizationError::InvalidChartSpec {
                    kind,
                    reason: "line chart needs at least one y column".to_string(),
                });
            }
            ChartSpec::DualAxis {
                y1_column,
                y2_column,
                ..
            } if y1_column == y2_column => {
                return Err(VisualizationError::InvalidChartSpec {
                    kind,
                    reason: format!(
                        "dual-axis chart uses '{}' for both axes",
                        y1_column
                    ),
                });
            }
            _ => {}
        }

        table.require_column(self.x_column(), kind)?;

        for y_column in self.y_columns() {
            table.require_numeric(y_column, kind)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_table() -> DataTable {
        DataTable::new(vec![
            Column::text("Month", vec!["Jan".into(), "Feb".into()]),
            Column::numeric("Revenue", vec![1000.0, 2000.0]),
            Column::numeric("Customers", vec![50.0, 80.0]),
        ])
        .unwrap()
    }

    fn dual(y1: &str, y2: &str) -> ChartSpec {
        ChartSpec::DualAxis {
            x_column: "Month".to_string(),
            y1_column: y1.to_string(),
            y2_column: y2.to_string(),
            y1_label: y1.to_string(),
            y2_label: y2.to_string(),
        }
    }

    #[test]
    fn valid_dual_axis_passes() {
        assert!(dual("Revenue", "Customers").validate(&sales_table()).is_ok());
    }

    #[test]
    fn same_column_twice_is_invalid() {
        let err = dual("Revenue", "Revenue").validate(&sales_table()).unwrap_err();
        assert!(matches!(
            err,
            VisualizationError::InvalidChartSpec {
                kind: ChartKind::DualAxis,
                ..
            }
        ));
    }

    #[test]
    fn empty_line_is_invalid() {
        let spec: ChartSpec = ChartSpec::Line {
            x_column: "Month".to_string(),
            y_columns: vec![],
        };

        assert!(matches!(
            spec.validate(&sales_table()),
            Err(VisualizationError::InvalidChartSpec { kind: ChartKind::Line, .. })
        ));
    }

    #[test]
    fn missing_columns_are_reported() {
        assert_eq!(
            dual("Revenue", "Users").validate(&sales_table()).unwrap_err(),
            VisualizationError::ColumnNotFound {
                column: "Users".to_string(),
                kind: ChartKind::DualAxis
            }
        );

        let bar: ChartSpec = ChartSpec::Bar {
            x_column: "Quarter".to_string(),
            y_column: "Revenue".to_string(),
        };
        assert!(matches!(
            bar.validate(&sales_table()),
            Err(VisualizationError::ColumnNotFound { ref column, .. }) if column == "Quarter"
        ));
    }

    #[test]
    fn text_y_column_is_rejected() {
        let bar: ChartSpec = ChartSpec::Bar {
            x_column: "Revenue".to_string(),
            y_column: "Month".to_string(),
        };

        assert!(matches!(
            bar.validate(&sales_table()),
            Err(VisualizationError::NonNumericColumn { .. })
        ));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let value: Value = serde_json::to_value(dual("Revenue", "Customers")).unwrap();
        assert_eq!(value["kind"], "dual_axis");
        assert_eq!(value["y2_column"], "Customers");
    }
}

use crate::common::*;

use crate::enums::chart_kind::*;

use crate::errors::visualization_error::*;

use crate::model::{chart::chart_spec::*, table::data_table::*};

#[doc = "LLM 이 JSON 으로 돌려주는 차트 추천 결과"]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartRecommendation {
    pub chart_type: ChartKind,
    pub x_column: String,
    pub y1_column: String,
    #[serde(default)]
    pub y2_column: Option<String>,
    #[serde(default)]
    pub reasoning: String,
}

impl ChartRecommendation {
    #[doc = r#"
        추천 결과를 렌더러가 사용하는 ChartSpec 으로 변환하고 표 기준으로 검증하는 함수.

        - bar: x_column / y1_column
        - line: x_column 을 제외한 모든 숫자 컬럼
        - dual_axis: y1_column (좌측 bar) / y2_column (우측 line). y2_column 이 없으면 오류
    "#]
    pub fn to_chart_spec(&self, table: &DataTable) -> Result<ChartSpec, VisualizationError> {
        let spec: ChartSpec = match self.chart_type {
            ChartKind::Bar => ChartSpec::Bar {
                x_column: self.x_column.clone(),
                y_column: self.y1_column.clone(),
            },
            ChartKind::Line => ChartSpec::Line {
                x_column: self.x_column.clone(),
                y_columns: table
                    .numeric_columns()
                    .into_iter()
                    .map(|c| c.name().clone())
                    .filter(|name| *name != self.x_column)
                    .collect(),
            },
            ChartKind::DualAxis => {
                let y2_column: String = self
                    .y2_column
                    .clone()
                    .filter(|name| !name.trim().is_empty())
                    .ok_or_else(|| VisualizationError::InvalidChartSpec {
                        kind: ChartKind::DualAxis,
                        reason: "recommendation is missing y2_column".to_string(),
                    })?;

                ChartSpec::DualAxis {
                    x_column: self.x_column.clone(),
                    y1_column: self.y1_column.clone(),
                    y1_label: self.y1_column.clone(),
                    y2_label: y2_column.clone(),
                    y2_column,
                }
            }
        };

        spec.validate(table)?;

        Ok(spec)
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
            Column::text("Owner", vec!["kim".into(), "lee".into()]),
        ])
        .unwrap()
    }

    #[test]
    fn parses_llm_json_with_null_y2() {
        let raw: &str = r#"{
            "chart_type": "bar",
            "x_column": "Month",
            "y1_column": "Revenue",
            "y2_column": null,
            "reasoning": "single metric"
        }"#;

        let rec: ChartRecommendation = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.chart_type, ChartKind::Bar);
        assert_eq!(rec.y2_column, None);

        assert_eq!(
            rec.to_chart_spec(&sales_table()).unwrap(),
            ChartSpec::Bar {
                x_column: "Month".to_string(),
                y_column: "Revenue".to_string()
            }
        );
    }

    #[test]
    fn line_uses_numeric_columns_except_x() {
        let rec: ChartRecommendation = ChartRecommendation::new(
            ChartKind::Line,
            "Month".to_string(),
            "Revenue".to_string(),
            None,
            String::new(),
        );

        assert_eq!(
            rec.to_chart_spec(&sales_table()).unwrap(),
            ChartSpec::Line {
                x_column: "Month".to_string(),
                y_columns: vec!["Revenue".to_string(), "Customers".to_string()]
            }
        );
    }

    #[test]
    fn dual_axis_requires_y2() {
        let rec: ChartRecommendation = ChartRecommendation::new(
            ChartKind::DualAxis,
            "Month".to_string(),
            "Revenue".to_string(),
            None,
            String::new(),
        );

        assert!(matches!(
            rec.to_chart_spec(&sales_table()),
            Err(VisualizationError::InvalidChartSpec { .. })
        ));
    }

    #[test]
    fn recommendation_is_validated_like_local_specs() {
        let same_column: ChartRecommendation = ChartRecommendation::new(
            ChartKind::DualAxis,
            "Month".to_string(),
            "Revenue".to_string(),
            Some("Revenue".to_string()),
            String::new(),
        );
        assert!(matches!(
            same_column.to_chart_spec(&sales_table()),
            Err(VisualizationError::InvalidChartSpec { .. })
        ));

        let unknown: ChartRecommendation = ChartRecommendation::new(
            ChartKind::DualAxis,
            "Month".to_string(),
            "Revenue".to_string(),
            Some("Users".to_string()),
            String::new(),
        );
        assert!(matches!(
            unknown.to_chart_spec(&sales_table()),
            Err(VisualizationError::ColumnNotFound { .. })
        ));
    }
}

use crate::common::*;

use crate::errors::visualization_error::*;

use crate::model::{
    chart::chart_spec::*, configs::classifier_config::*, table::data_table::*,
};

use crate::traits::service_traits::chart_detect_service::*;

use crate::utils_modules::format_utils::*;

#[derive(Debug, Clone, new)]
pub struct ChartDetectServiceImpl {
    classifier_config: ClassifierConfig,
}

impl ChartDetectServiceImpl {
    #[doc = r#"
        두 숫자 컬럼 평균(절대값)의 배율. 큰 값 / 작은 값.

        - 작은 쪽 평균이 0 이고 큰 쪽이 0 보다 크면 무한대 (이중 축 조건 충족)
        - 둘 다 0 이거나 행이 없어 평균을 구할 수 없으면 None (배율 규칙 건너뜀)
    "#]
    fn scale_ratio(first: &Column, second: &Column) -> Option<f64> {
        let first_mean: f64 = first.mean()?.abs();
        let second_mean: f64 = second.mean()?.abs();

        let (larger, smaller) = if first_mean >= second_mean {
            (first_mean, second_mean)
        } else {
            (second_mean, first_mean)
        };

        if larger == 0.0 {
            None
        } else if smaller == 0.0 {
            Some(f64::INFINITY)
        } else {
            Some(larger / smaller)
        }
    }

    #[doc = "금액성 키워드 컬럼과 (그와 다른) 건수성 키워드 컬럼의 첫 번째 조합"]
    fn find_keyword_pair<'a>(&self, numeric_cols: &[&'a Column]) -> Option<(&'a Column, &'a Column)> {
        let magnitude_keywords: &[String] = self.classifier_config.magnitude_keywords();
        let count_keywords: &[String] = self.classifier_config.count_keywords();

        numeric_cols
            .iter()
            .filter(|col| matches_keyword(col.name(), magnitude_keywords))
            .find_map(|magnitude_col| {
                numeric_cols
                    .iter()
                    .find(|col| {
                        col.name() != magnitude_col.name()
                            && matches_keyword(col.name(), count_keywords)
                    })
                    .map(|count_col| (*magnitude_col, *count_col))
            })
    }

    fn dual_axis_spec(x_column: &str, y1: &Column, y2: &Column) -> ChartSpec {
        ChartSpec::DualAxis {
            x_column: x_column.to_string(),
            y1_column: y1.name().clone(),
            y2_column: y2.name().clone(),
            y1_label: y1.name().clone(),
            y2_label: y2.name().clone(),
        }
    }
}

impl ChartDetectService for ChartDetectServiceImpl {
    #[doc = r#"
        표에 맞는 차트 종류를 결정하는 휴리스틱. 앞의 규칙이 우선한다.

        1. 숫자 컬럼이 2개 이상이고 앞의 두 컬럼 평균 배율이 임계값 이상 -> 이중 축
        2. 금액성 컬럼과 건수성 컬럼이 모두 있음 -> 이중 축 (금액: 좌측 bar, 건수: 우측 line)
        3. 숫자 컬럼이 1개 -> bar
        4. 그 외 -> 모든 숫자 컬럼의 line
        x 축은 항상 표의 첫 번째 컬럼이다.
    "#]
    fn detect_chart_spec(&self, table: &DataTable) -> Result<ChartSpec, VisualizationError> {
        let numeric_cols: Vec<&Column> = table.numeric_columns();

        let x_column: &str = match (numeric_cols.is_empty(), table.first_column()) {
            (false, Some(first)) => first.name().as_str(),
            _ => return Err(VisualizationError::NoNumericData),
        };

        if let [first, second, ..] = numeric_cols.as_slice() {
            if let Some(ratio) = Self::scale_ratio(first, second) {
                if ratio >= *self.classifier_config.dual_axis_ratio_threshold() {
                    info!(
                        "Detected large scale difference (ratio: {:.1}x) -> using dual-axis chart",
                        ratio
                    );
                    return Ok(Self::dual_axis_spec(x_column, first, second));
                }
            }
        }

        if let Some((magnitude_col, count_col)) = self.find_keyword_pair(&numeric_cols) {
            info!(
                "Detected magnitude/count pattern ({} / {}) -> using dual-axis chart",
                magnitude_col.name(),
                count_col.name()
            );
            return Ok(Self::dual_axis_spec(x_column, magnitude_col, count_col));
        }

        if let [only] = numeric_cols.as_slice() {
            info!("Single metric detected -> using bar chart");
            return Ok(ChartSpec::Bar {
                x_column: x_column.to_string(),
                y_column: only.name().clone(),
            });
        }

        info!("Multiple metrics with similar scales -> using line chart");

        Ok(ChartSpec::Line {
            x_column: x_column.to_string(),
            y_columns: numeric_cols.iter().map(|c| c.name().clone()).collect(),
        })
    }
}

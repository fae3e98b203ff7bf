use crate::errors::visualization_error::*;

use crate::model::{chart::chart_spec::*, table::data_table::*};

pub trait ChartDetectService: Send + Sync {
    #[doc = "
        표의 숫자 컬럼 구성을 보고 bar / line / dual_axis 중 하나를 결정한다
        # Errors
        * `NoNumericData` - 숫자 컬럼이 하나도 없는 경우
    "]
    fn detect_chart_spec(&self, table: &DataTable) -> Result<ChartSpec, VisualizationError>;
}

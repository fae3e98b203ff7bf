use crate::common::*;

use crate::model::{chart::chart_spec::*, table::data_table::*};

#[async_trait]
pub trait RecommendService: Send + Sync {
    #[doc = "
        LLM 에게 차트 추천을 받아 검증된 ChartSpec 으로 변환한다
        검증 실패는 VisualizationError 를 root cause 로 가지는 오류로 반환한다
    "]
    async fn recommend_chart_spec(&self, table: &DataTable) -> anyhow::Result<ChartSpec>;
}

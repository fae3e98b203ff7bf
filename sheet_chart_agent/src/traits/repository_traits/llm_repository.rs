use crate::common::*;

use crate::model::chart::chart_recommendation::*;

#[async_trait]
pub trait LlmRepository: Send + Sync {
    #[doc = "
        데이터 요약과 컬럼명을 전달하고 LLM 으로부터 차트 추천을 받는다
        # Arguments
        * `data_summary` - 숫자 컬럼 기술통계 문자열
        * `column_names` - 표의 전체 컬럼명
    "]
    async fn recommend_chart(
        &self,
        data_summary: &str,
        column_names: &[String],
    ) -> Result<ChartRecommendation, anyhow::Error>;
}

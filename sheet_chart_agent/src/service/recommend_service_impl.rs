use crate::common::*;

use crate::model::{
    chart::{chart_recommendation::*, chart_spec::*},
    table::data_table::*,
};

use crate::traits::{repository_traits::llm_repository::*, service_traits::recommend_service::*};

#[derive(Debug, new)]
pub struct RecommendServiceImpl<L: LlmRepository> {
    llm_repository: L,
}

#[async_trait]
impl<L: LlmRepository> RecommendService for RecommendServiceImpl<L> {
    async fn recommend_chart_spec(&self, table: &DataTable) -> anyhow::Result<ChartSpec> {
        let data_summary: String = table.describe();
        let column_names: Vec<String> = table.column_names();

        let recommendation: ChartRecommendation = self
            .llm_repository
            .recommend_chart(&data_summary, &column_names)
            .await?;

        info!(
            "AI recommends {} chart: {}",
            recommendation.chart_type(),
            recommendation.reasoning()
        );

        let spec: ChartSpec = recommendation.to_chart_spec(table)?;

        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::chart_kind::*;
    use crate::errors::visualization_error::*;
    use std::sync::Mutex;

    struct FakeLlmRepository {
        recommendation: ChartRecommendation,
        seen_columns: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmRepository for FakeLlmRepository {
        async fn recommend_chart(
            &self,
            data_summary: &str,
            column_names: &[String],
        ) -> Result<ChartRecommendation, anyhow::Error> {
            assert!(data_summary.contains("mean"));
            *self.seen_columns.lock().unwrap() = column_names.to_vec();
            Ok(self.recommendation.clone())
        }
    }

    fn sales_table() -> DataTable {
        DataTable::new(vec![
            Column::text("Month", vec!["Jan".into(), "Feb".into()]),
            Column::numeric("Revenue", vec![1000.0, 2000.0]),
            Column::numeric("Customers", vec![50.0, 80.0]),
        ])
        .unwrap()
    }

    fn service_with(recommendation: ChartRecommendation) -> RecommendServiceImpl<FakeLlmRepository> {
        RecommendServiceImpl::new(FakeLlmRepository {
            recommendation,
            seen_columns: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn converts_recommendation_into_spec() {
        let service = service_with(ChartRecommendation::new(
            ChartKind::DualAxis,
            "Month".to_string(),
            "Revenue".to_string(),
            Some("Customers".to_string()),
            "different scales".to_string(),
        ));

        let spec: ChartSpec = service.recommend_chart_spec(&sales_table()).await.unwrap();

        assert_eq!(
            spec,
            ChartSpec::DualAxis {
                x_column: "Month".to_string(),
                y1_column: "Revenue".to_string(),
                y2_column: "Customers".to_string(),
                y1_label: "Revenue".to_string(),
                y2_label: "Customers".to_string(),
            }
        );
        assert_eq!(
            *service.llm_repository.seen_columns.lock().unwrap(),
            vec!["Month", "Revenue", "Customers"]
        );
    }

    #[tokio::test]
    async fn unknown_column_surfaces_as_validation_error() {
        let service = service_with(ChartRecommendation::new(
            ChartKind::Bar,
            "Month".to_string(),
            "Profit".to_string(),
            None,
            String::new(),
        ));

        let err: anyhow::Error = service
            .recommend_chart_spec(&sales_table())
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<VisualizationError>(),
            Some(&VisualizationError::ColumnNotFound {
                column: "Profit".to_string(),
                kind: ChartKind::Bar
            })
        );
    }
}

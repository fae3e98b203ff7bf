use crate::common::*;

use crate::enums::visualize_mode::*;

use crate::errors::visualization_error::*;

use crate::model::{chart::chart_spec::*, configs::system_config::*, table::data_table::*};

use crate::traits::service_traits::{
    chart_detect_service::*, chart_service::*, recommend_service::*, table_service::*,
};

#[derive(Debug, new)]
pub struct MainController<T, D, R, C>
where
    T: TableService,
    D: ChartDetectService,
    R: RecommendService,
    C: ChartService,
{
    table_service: T,
    chart_detect_service: D,
    recommend_service: R,
    chart_service: C,
    system_config: SystemConfig,
    sheet_id: String,
    worksheet_name: String,
}

impl<T, D, R, C> MainController<T, D, R, C>
where
    T: TableService,
    D: ChartDetectService,
    R: RecommendService,
    C: ChartService,
{
    #[doc = r#"
        스프레드시트 데이터를 가져와 차트 한 장을 만드는 핵심 함수.

        1. 설정된 스프레드시트/워크시트의 레코드를 표로 가져온다
        2. 표의 크기, 컬럼명, 앞쪽 몇 개 행을 로그로 남긴다
        3. 차트 종류 결정
           - auto: 로컬 휴리스틱
           - ai: LLM 추천. 호출 자체가 실패하면 휴리스틱으로 대체하고, 추천 결과가 표와 맞지 않으면 실패
        4. 차트를 렌더링하고 저장된 경로를 반환한다

        # Returns
        * `anyhow::Result<PathBuf>` - 생성된 차트 파일 경로
    "#]
    pub async fn main_task(&self) -> anyhow::Result<PathBuf> {
        /* 1. 데이터 조회 */
        let table: DataTable = self
            .table_service
            .fetch_table(&self.sheet_id, &self.worksheet_name)
            .await?;

        /* 2. 데이터 개요 */
        info!(
            "Data shape: ({}, {})",
            table.row_count(),
            table.columns().len()
        );
        info!("Columns: {:?}", table.column_names());
        info!(
            "Preview:\n{}",
            table.preview(*self.system_config.preview_rows())
        );

        /* 3. 차트 종류 결정 */
        let spec: ChartSpec = self.resolve_chart_spec(&table).await?;
        info!("Chart spec: {:?}", spec);

        /* 4. 렌더링 */
        let output_path: PathBuf = self
            .chart_service
            .render_chart(&table, &spec, self.system_config.chart_title().as_deref(), None)
            .await?;

        info!("Visualization saved to: {}", output_path.display());

        Ok(output_path)
    }

    #[doc = "실행 모드에 따라 휴리스틱 또는 LLM 추천으로 ChartSpec 을 결정"]
    async fn resolve_chart_spec(&self, table: &DataTable) -> anyhow::Result<ChartSpec> {
        match self.system_config.mode() {
            VisualizeMode::Auto => Ok(self.chart_detect_service.detect_chart_spec(table)?),
            VisualizeMode::Ai => match self.recommend_service.recommend_chart_spec(table).await {
                Ok(spec) => Ok(spec),
                Err(e) if e.downcast_ref::<VisualizationError>().is_some() => {
                    error!(
                        "[MainController->resolve_chart_spec] AI recommendation is not usable: {:?}",
                        e
                    );
                    Err(e)
                }
                Err(e) => {
                    warn!(
                        "[MainController->resolve_chart_spec] AI recommendation failed, falling back to rule based detection: {:?}",
                        e
                    );
                    Ok(self.chart_detect_service.detect_chart_spec(table)?)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::chart_kind::*;
    use std::sync::Mutex;

    struct FakeTableService {
        table: DataTable,
    }

    #[async_trait]
    impl TableService for FakeTableService {
        async fn fetch_table(&self, _sheet_id: &str, _worksheet_name: &str) -> anyhow::Result<DataTable> {
            Ok(self.table.clone())
        }
    }

    struct FakeChartDetectService;

    impl ChartDetectService for FakeChartDetectService {
        fn detect_chart_spec(&self, table: &DataTable) -> Result<ChartSpec, VisualizationError> {
            let first: &str = table.first_column().map(|c| c.name().as_str()).unwrap_or("");
            Ok(ChartSpec::Bar {
                x_column: first.to_string(),
                y_column: "Revenue".to_string(),
            })
        }
    }

    enum RecommendOutcome {
        Spec(ChartSpec),
        TransportFailure,
        Invalid,
    }

    struct FakeRecommendService {
        outcome: RecommendOutcome,
    }

    #[async_trait]
    impl RecommendService for FakeRecommendService {
        async fn recommend_chart_spec(&self, _table: &DataTable) -> anyhow::Result<ChartSpec> {
            match &self.outcome {
                RecommendOutcome::Spec(spec) => Ok(spec.clone()),
                RecommendOutcome::TransportFailure => {
                    Err(anyhow!("[OpenAiRepositoryImpl->chat] request failed"))
                }
                RecommendOutcome::Invalid => Err(VisualizationError::ColumnNotFound {
                    column: "Profit".to_string(),
                    kind: ChartKind::Bar,
                }
                .into()),
            }
        }
    }

    #[derive(Default)]
    struct FakeChartService {
        rendered: Mutex<Vec<(ChartSpec, Option<String>)>>,
    }

    #[async_trait]
    impl ChartService for FakeChartService {
        async fn render_chart(
            &self,
            _table: &DataTable,
            spec: &ChartSpec,
            title: Option<&str>,
            _output_path: Option<&Path>,
        ) -> anyhow::Result<PathBuf> {
            self.rendered
                .lock()
                .unwrap()
                .push((spec.clone(), title.map(str::to_string)));
            Ok(PathBuf::from(format!("charts/{}_chart.png", spec.kind())))
        }

        async fn render_bar_chart(
            &self,
            _table: &DataTable,
            _x_column: &str,
            _y_column: &str,
            _title: Option<&str>,
            _output_path: Option<&Path>,
        ) -> anyhow::Result<PathBuf> {
            unreachable!("controller renders through render_chart")
        }

        async fn render_line_chart(
            &self,
            _table: &DataTable,
            _x_column: &str,
            _y_columns: &[String],
            _title: Option<&str>,
            _output_path: Option<&Path>,
        ) -> anyhow::Result<PathBuf> {
            unreachable!("controller renders through render_chart")
        }

        async fn render_dual_axis_chart(
            &self,
            _table: &DataTable,
            _spec: &ChartSpec,
            _title: Option<&str>,
            _output_path: Option<&Path>,
        ) -> anyhow::Result<PathBuf> {
            unreachable!("controller renders through render_chart")
        }
    }

    fn dual_spec() -> ChartSpec {
        ChartSpec::DualAxis {
            x_column: "Month".to_string(),
            y1_column: "Revenue".to_string(),
            y2_column: "Customers".to_string(),
            y1_label: "Revenue".to_string(),
            y2_label: "Customers".to_string(),
        }
    }

    fn controller(
        mode: VisualizeMode,
        outcome: RecommendOutcome,
    ) -> MainController<FakeTableService, FakeChartDetectService, FakeRecommendService, FakeChartService>
    {
        let table: DataTable = DataTable::new(vec![
            Column::text("Month", vec!["Jan".into(), "Feb".into()]),
            Column::numeric("Revenue", vec![1000.0, 2000.0]),
            Column::numeric("Customers", vec![50.0, 80.0]),
        ])
        .unwrap();

        let system_config: SystemConfig = SystemConfig {
            mode,
            chart_title: Some("Monthly".to_string()),
            ..SystemConfig::default()
        };

        MainController::new(
            FakeTableService { table },
            FakeChartDetectService,
            FakeRecommendService { outcome },
            FakeChartService::default(),
            system_config,
            "sheet-id".to_string(),
            "Sheet1".to_string(),
        )
    }

    #[tokio::test]
    async fn auto_mode_uses_detected_spec() {
        let controller = controller(VisualizeMode::Auto, RecommendOutcome::Spec(dual_spec()));

        let path: PathBuf = controller.main_task().await.unwrap();

        assert_eq!(path, PathBuf::from("charts/bar_chart.png"));
        let rendered = controller.chart_service.rendered.lock().unwrap();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].0.kind(), ChartKind::Bar);
        assert_eq!(rendered[0].1.as_deref(), Some("Monthly"));
    }

    #[tokio::test]
    async fn ai_mode_uses_recommended_spec() {
        let controller = controller(VisualizeMode::Ai, RecommendOutcome::Spec(dual_spec()));

        controller.main_task().await.unwrap();

        let rendered = controller.chart_service.rendered.lock().unwrap();
        assert_eq!(rendered[0].0, dual_spec());
    }

    #[tokio::test]
    async fn ai_transport_failure_falls_back_to_detection() {
        let controller = controller(VisualizeMode::Ai, RecommendOutcome::TransportFailure);

        let path: PathBuf = controller.main_task().await.unwrap();

        assert_eq!(path, PathBuf::from("charts/bar_chart.png"));
    }

    #[tokio::test]
    async fn invalid_recommendation_is_fatal() {
        let controller = controller(VisualizeMode::Ai, RecommendOutcome::Invalid);

        let err: anyhow::Error = controller.main_task().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VisualizationError>(),
            Some(VisualizationError::ColumnNotFound { .. })
        ));
        assert!(controller.chart_service.rendered.lock().unwrap().is_empty());
    }
}

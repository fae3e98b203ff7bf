use crate::common::*;

use crate::model::{chart::chart_spec::*, table::data_table::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        ChartSpec 종류에 맞는 렌더러로 차트를 그리고 저장된 파일 경로를 반환한다
        # Arguments
        * `table` - 원본 데이터 표
        * `spec` - 차트 종류 및 축 배정
        * `title` - 차트 제목 (None 이면 차트 종류별 기본 제목)
        * `output_path` - 저장 경로 (None 이면 output_dir 아래 타임스탬프 파일명)
    "]
    async fn render_chart(
        &self,
        table: &DataTable,
        spec: &ChartSpec,
        title: Option<&str>,
        output_path: Option<&Path>,
    ) -> anyhow::Result<PathBuf>;

    async fn render_bar_chart(
        &self,
        table: &DataTable,
        x_column: &str,
        y_column: &str,
        title: Option<&str>,
        output_path: Option<&Path>,
    ) -> anyhow::Result<PathBuf>;

    async fn render_line_chart(
        &self,
        table: &DataTable,
        x_column: &str,
        y_columns: &[String],
        title: Option<&str>,
        output_path: Option<&Path>,
    ) -> anyhow::Result<PathBuf>;

    #[doc = "
        좌측 축 bar(y1) + 우측 축 line(y2) 이중 축 차트
        컬럼이 표에 없으면 그리기 전에 ColumnNotFound 로 실패한다
    "]
    async fn render_dual_axis_chart(
        &self,
        table: &DataTable,
        spec: &ChartSpec,
        title: Option<&str>,
        output_path: Option<&Path>,
    ) -> anyhow::Result<PathBuf>;
}

use crate::common::*;

use crate::enums::chart_kind::*;

use crate::errors::visualization_error::*;

use crate::model::{
    chart::chart_spec::*, configs::chart_style_config::*, table::data_table::*,
};

use crate::traits::service_traits::chart_service::*;

use crate::utils_modules::{format_utils::*, io_utils::*, time_utils::*};

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const BAR_HALF_WIDTH: f64 = 0.35;
const MAX_X_LABELS: usize = 40;

#[derive(Debug, Clone)]
struct BarPlotData {
    title: String,
    x_desc: String,
    y_desc: String,
    categories: Vec<String>,
    values: Vec<f64>,
    currency: bool,
    y_range: (f64, f64),
}

#[derive(Debug, Clone)]
struct LinePlotData {
    title: String,
    x_desc: String,
    categories: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
    y_range: (f64, f64),
}

#[derive(Debug, Clone)]
struct DualAxisPlotData {
    title: String,
    x_desc: String,
    categories: Vec<String>,
    y1_label: String,
    y1_values: Vec<f64>,
    y1_currency: bool,
    y1_range: (f64, f64),
    y2_label: String,
    y2_values: Vec<f64>,
    y2_currency: bool,
    y2_range: (f64, f64),
}

#[derive(Debug, Clone)]
enum PlotData {
    Bar(BarPlotData),
    Line(LinePlotData),
    DualAxis(DualAxisPlotData),
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_style: ChartStyleConfig,
    /* 이 키워드가 포함된 컬럼 값은 통화($) 포맷으로 표기 */
    currency_keywords: Vec<String>,
}

impl ChartServiceImpl {
    #[doc = "Bar 차트 Y축 범위. 0 을 기준선으로 포함하고 값 라벨이 들어갈 여백을 둔다"]
    fn calculate_bar_range(&self, values: &[f64]) -> (f64, f64) {
        let min_val: f64 = values.iter().copied().fold(0.0_f64, f64::min);
        let max_val: f64 = values.iter().copied().fold(0.0_f64, f64::max);

        let span: f64 = max_val - min_val;
        if span <= 0.0 {
            return (0.0, 1.0);
        }

        let padding: f64 = span * 0.15;
        let y_min: f64 = if min_val < 0.0 { min_val - padding } else { 0.0 };
        let y_max: f64 = if max_val > 0.0 { max_val + padding } else { 0.0 };

        (y_min, y_max)
    }

    #[doc = "Line 차트 Y축 범위. 최소/최대값 양쪽에 여백을 둔다"]
    fn calculate_line_range(&self, values: &[f64]) -> (f64, f64) {
        if values.is_empty() {
            return (0.0, 1.0);
        }

        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let span: f64 = max_val - min_val;
        let padding: f64 = if span > 0.0 {
            span * 0.15
        } else {
            (max_val.abs() * 0.1).max(1.0)
        };

        (min_val - padding, max_val + padding)
    }

    #[doc = "저장 경로. 지정되지 않으면 {output_dir}/{kind}_chart_{timestamp}.{format}"]
    fn resolve_output_path(&self, kind: ChartKind, output_path: Option<&Path>) -> PathBuf {
        match output_path {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(self.chart_style.output_dir()).join(format!(
                "{}_chart_{}.{}",
                kind,
                get_current_local_file_stamp(),
                self.chart_style.image_format()
            )),
        }
    }

    fn is_currency_column(&self, column_name: &str) -> bool {
        matches_keyword(column_name, &self.currency_keywords)
    }

    fn ensure_rows(&self, table: &DataTable, kind: ChartKind) -> Result<(), VisualizationError> {
        if table.row_count() == 0 {
            return Err(VisualizationError::InvalidChartSpec {
                kind,
                reason: "table has no rows".to_string(),
            });
        }

        Ok(())
    }

    #[doc = "plotters 동기 렌더링을 blocking 스레드에서 수행하고 결과 경로를 반환"]
    async fn draw(
        &self,
        kind: ChartKind,
        output_path: PathBuf,
        plot: PlotData,
    ) -> anyhow::Result<PathBuf> {
        /* Create parent directory if it doesn't exist */
        ensure_parent_dir(&output_path).await?;

        let chart_style: ChartStyleConfig = self.chart_style.clone();
        let task_path: PathBuf = output_path.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                render_to_file(&task_path, &chart_style, &plot)
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->draw] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.with_context(|| {
            format!(
                "[ChartServiceImpl->draw] {} chart drawing/present failed",
                kind
            )
        })?;

        info!("{} chart generated successfully: {:?}", kind, output_path);

        Ok(output_path)
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_chart(
        &self,
        table: &DataTable,
        spec: &ChartSpec,
        title: Option<&str>,
        output_path: Option<&Path>,
    ) -> anyhow::Result<PathBuf> {
        match spec {
            ChartSpec::Bar { x_column, y_column } => {
                self.render_bar_chart(table, x_column, y_column, title, output_path)
                    .await
            }
            ChartSpec::Line {
                x_column,
                y_columns,
            } => {
                self.render_line_chart(table, x_column, y_columns, title, output_path)
                    .await
            }
            ChartSpec::DualAxis { .. } => {
                self.render_dual_axis_chart(table, spec, title, output_path)
                    .await
            }
        }
    }

    async fn render_bar_chart(
        &self,
        table: &DataTable,
        x_column: &str,
        y_column: &str,
        title: Option<&str>,
        output_path: Option<&Path>,
    ) -> anyhow::Result<PathBuf> {
        let spec: ChartSpec = ChartSpec::Bar {
            x_column: x_column.to_string(),
            y_column: y_column.to_string(),
        };
        spec.validate(table)?;
        self.ensure_rows(table, ChartKind::Bar)?;

        let values: Vec<f64> = table.require_numeric(y_column, ChartKind::Bar)?.to_vec();

        let plot: BarPlotData = BarPlotData {
            title: title
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} by {}", y_column, x_column)),
            x_desc: x_column.to_string(),
            y_desc: y_column.to_string(),
            categories: table.category_labels(x_column, ChartKind::Bar)?,
            currency: self.is_currency_column(y_column),
            y_range: self.calculate_bar_range(&values),
            values,
        };

        let output_path: PathBuf = self.resolve_output_path(ChartKind::Bar, output_path);
        self.draw(ChartKind::Bar, output_path, PlotData::Bar(plot))
            .await
    }

    async fn render_line_chart(
        &self,
        table: &DataTable,
        x_column: &str,
        y_columns: &[String],
        title: Option<&str>,
        output_path: Option<&Path>,
    ) -> anyhow::Result<PathBuf> {
        let spec: ChartSpec = ChartSpec::Line {
            x_column: x_column.to_string(),
            y_columns: y_columns.to_vec(),
        };
        spec.validate(table)?;
        self.ensure_rows(table, ChartKind::Line)?;

        let mut series: Vec<(String, Vec<f64>)> = Vec::with_capacity(y_columns.len());
        for y_column in y_columns {
            let values: Vec<f64> = table.require_numeric(y_column, ChartKind::Line)?.to_vec();
            series.push((y_column.clone(), values));
        }

        let all_values: Vec<f64> = series
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .collect();

        let plot: LinePlotData = LinePlotData {
            title: title
                .map(str::to_string)
                .unwrap_or_else(|| String::from("Trend Analysis")),
            x_desc: x_column.to_string(),
            categories: table.category_labels(x_column, ChartKind::Line)?,
            y_range: self.calculate_line_range(&all_values),
            series,
        };

        let output_path: PathBuf = self.resolve_output_path(ChartKind::Line, output_path);
        self.draw(ChartKind::Line, output_path, PlotData::Line(plot))
            .await
    }

    async fn render_dual_axis_chart(
        &self,
        table: &DataTable,
        spec: &ChartSpec,
        title: Option<&str>,
        output_path: Option<&Path>,
    ) -> anyhow::Result<PathBuf> {
        let ChartSpec::DualAxis {
            x_column,
            y1_column,
            y2_column,
            y1_label,
            y2_label,
        } = spec
        else {
            return Err(VisualizationError::InvalidChartSpec {
                kind: spec.kind(),
                reason: "dual-axis renderer received a non dual-axis spec".to_string(),
            }
            .into());
        };

        spec.validate(table)?;
        self.ensure_rows(table, ChartKind::DualAxis)?;

        let y1_values: Vec<f64> = table
            .require_numeric(y1_column, ChartKind::DualAxis)?
            .to_vec();
        let y2_values: Vec<f64> = table
            .require_numeric(y2_column, ChartKind::DualAxis)?
            .to_vec();

        let plot: DualAxisPlotData = DualAxisPlotData {
            title: title
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} and {} Analysis", y1_label, y2_label)),
            x_desc: x_column.clone(),
            categories: table.category_labels(x_column, ChartKind::DualAxis)?,
            y1_label: y1_label.clone(),
            y1_currency: self.is_currency_column(y1_column),
            y1_range: self.calculate_bar_range(&y1_values),
            y1_values,
            y2_label: y2_label.clone(),
            y2_currency: self.is_currency_column(y2_column),
            y2_range: self.calculate_line_range(&y2_values),
            y2_values,
        };

        let output_path: PathBuf = self.resolve_output_path(ChartKind::DualAxis, output_path);
        self.draw(ChartKind::DualAxis, output_path, PlotData::DualAxis(plot))
            .await
    }
}

fn rgb(color: &[u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

fn text_style<'a>(style: &'a ChartStyleConfig, size: u32, color: &RGBColor) -> TextStyle<'a> {
    (style.font_family().as_str(), size as f64)
        .into_font()
        .color(color)
}

#[doc = "x 축 눈금값(정수 위치)에 해당하는 카테고리 라벨. 정수 위치가 아니면 빈 문자열"]
fn category_label(categories: &[String], x: f64) -> String {
    let nearest: f64 = x.round();

    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }

    categories.get(nearest as usize).cloned().unwrap_or_default()
}

fn needs_label_rotation(style: &ChartStyleConfig, categories: &[String]) -> bool {
    categories
        .iter()
        .any(|label| label.chars().count() > *style.rotate_label_threshold())
}

fn x_label_area_size(style: &ChartStyleConfig, categories: &[String], rotate: bool) -> u32 {
    let label_size: u32 = *style.label_font_size();

    if rotate {
        let longest: u32 = categories
            .iter()
            .map(|label| label.chars().count() as u32)
            .max()
            .unwrap_or(0);
        (longest * label_size * 6 / 10 + label_size * 3).min(style.height() / 3)
    } else {
        label_size * 4
    }
}

fn x_label_style<'a>(
    style: &'a ChartStyleConfig,
    color: &RGBColor,
    rotate: bool,
) -> TextStyle<'a> {
    let base: TextStyle<'a> = text_style(style, *style.label_font_size(), color);

    if rotate {
        base.transform(FontTransform::Rotate90)
    } else {
        base
    }
}

fn value_label_style<'a>(style: &'a ChartStyleConfig, color: &RGBColor) -> TextStyle<'a> {
    text_style(style, *style.value_font_size(), color).pos(Pos::new(HPos::Center, VPos::Bottom))
}

#[doc = "확장자가 svg 면 SVG backend, 그 외는 bitmap(png) backend 로 그린다"]
fn render_to_file(
    output_path: &Path,
    style: &ChartStyleConfig,
    plot: &PlotData,
) -> anyhow::Result<()> {
    let size: (u32, u32) = (*style.width(), *style.height());

    let is_svg: bool = output_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        draw_plot(
            SVGBackend::new(output_path, size).into_drawing_area(),
            style,
            plot,
        )
    } else {
        draw_plot(
            BitMapBackend::new(output_path, size).into_drawing_area(),
            style,
            plot,
        )
    }
}

fn draw_plot<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    style: &ChartStyleConfig,
    plot: &PlotData,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&rgb(style.background()))?;

    match plot {
        PlotData::Bar(data) => draw_bar_chart(&root, style, data)?,
        PlotData::Line(data) => draw_line_chart(&root, style, data)?,
        PlotData::DualAxis(data) => draw_dual_axis_chart(&root, style, data)?,
    }

    root.present()?;
    Ok(())
}

fn draw_bar_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    style: &ChartStyleConfig,
    data: &BarPlotData,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let text_color: RGBColor = rgb(style.text_color());
    let grid_color: RGBColor = rgb(style.grid_color());
    let bar_color: RGBColor = style
        .palette()
        .first()
        .map(rgb)
        .unwrap_or_else(|| rgb(style.primary_color()));

    let rotate: bool = needs_label_rotation(style, &data.categories);
    let count: usize = data.categories.len();
    let (y_min, y_max) = data.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&data.title, text_style(style, *style.title_font_size(), &text_color))
        .margin(30)
        .x_label_area_size(x_label_area_size(style, &data.categories, rotate))
        .y_label_area_size(style.label_font_size() * 6)
        .build_cartesian_2d(-0.5f64..(count as f64 - 0.5), y_min..y_max)?;

    let categories: &[String] = &data.categories;
    let currency: bool = data.currency;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(&data.x_desc)
        .y_desc(&data.y_desc)
        .x_labels(count.min(MAX_X_LABELS))
        .y_labels(10)
        .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .axis_desc_style(text_style(style, *style.label_font_size(), &text_color))
        .x_label_style(x_label_style(style, &text_color, rotate))
        .y_label_style(text_style(style, *style.label_font_size(), &text_color))
        .x_label_formatter(&|x| category_label(categories, *x))
        .y_label_formatter(&|y| format_value_label(*y, currency))
        .draw()?;

    chart
        .draw_series(data.values.iter().enumerate().map(|(idx, value)| {
            let center: f64 = idx as f64;
            Rectangle::new(
                [(center - BAR_HALF_WIDTH, 0.0), (center + BAR_HALF_WIDTH, *value)],
                bar_color.filled(),
            )
        }))?
        .label(&data.y_desc)
        .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], bar_color.filled()));

    let label_style: TextStyle = value_label_style(style, &text_color);
    chart.draw_series(data.values.iter().enumerate().map(|(idx, value)| {
        EmptyElement::at((idx as f64, *value))
            + Text::new(
                format_value_label(*value, currency),
                (0, -4),
                label_style.clone(),
            )
    }))?;

    Ok(())
}

fn draw_line_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    style: &ChartStyleConfig,
    data: &LinePlotData,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let text_color: RGBColor = rgb(style.text_color());
    let grid_color: RGBColor = rgb(style.grid_color());

    let rotate: bool = needs_label_rotation(style, &data.categories);
    let count: usize = data.categories.len();
    let (y_min, y_max) = data.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&data.title, text_style(style, *style.title_font_size(), &text_color))
        .margin(30)
        .x_label_area_size(x_label_area_size(style, &data.categories, rotate))
        .y_label_area_size(style.label_font_size() * 6)
        .build_cartesian_2d(-0.5f64..(count as f64 - 0.5), y_min..y_max)?;

    let categories: &[String] = &data.categories;

    chart
        .configure_mesh()
        .x_desc(&data.x_desc)
        .y_desc("Value")
        .x_labels(count.min(MAX_X_LABELS))
        .y_labels(10)
        .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .axis_desc_style(text_style(style, *style.label_font_size(), &text_color))
        .x_label_style(x_label_style(style, &text_color, rotate))
        .y_label_style(text_style(style, *style.label_font_size(), &text_color))
        .x_label_formatter(&|x| category_label(categories, *x))
        .y_label_formatter(&|y| format_thousands(*y))
        .draw()?;

    for (series_idx, (name, values)) in data.series.iter().enumerate() {
        let color: RGBColor = if style.palette().is_empty() {
            rgb(style.primary_color())
        } else {
            rgb(&style.palette()[series_idx % style.palette().len()])
        };

        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(idx, v)| (idx as f64, *v)),
                color.stroke_width(2),
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart.draw_series(
            values
                .iter()
                .enumerate()
                .map(|(idx, v)| Circle::new((idx as f64, *v), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&grid_color)
        .label_font(text_style(style, *style.label_font_size(), &text_color))
        .draw()?;

    Ok(())
}

#[doc = r#"
    좌측 축(y1)은 bar, 우측 축(y2)은 marker 가 있는 line 으로 그리는 이중 축 차트.

    - 두 축은 서로 독립적인 범위를 가지며 x 축 카테고리만 공유한다
    - 좌/우 시리즈와 눈금 라벨은 고정된 색상 쌍(primary / secondary)으로 구분한다
    - 모든 bar 와 line 점 위에 값을 표기한다 (금액 컬럼이면 통화 포맷)
    - 두 시리즈의 범례를 하나로 합쳐 좌측 상단에 그린다
"#]
fn draw_dual_axis_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    style: &ChartStyleConfig,
    data: &DualAxisPlotData,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let text_color: RGBColor = rgb(style.text_color());
    let grid_color: RGBColor = rgb(style.grid_color());
    let primary_color: RGBColor = rgb(style.primary_color());
    let secondary_color: RGBColor = rgb(style.secondary_color());

    let rotate: bool = needs_label_rotation(style, &data.categories);
    let count: usize = data.categories.len();
    let x_range = -0.5f64..(count as f64 - 0.5);
    let (y1_min, y1_max) = data.y1_range;
    let (y2_min, y2_max) = data.y2_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&data.title, text_style(style, *style.title_font_size(), &text_color))
        .margin(30)
        .x_label_area_size(x_label_area_size(style, &data.categories, rotate))
        .y_label_area_size(style.label_font_size() * 6)
        .right_y_label_area_size(style.label_font_size() * 6)
        .build_cartesian_2d(x_range.clone(), y1_min..y1_max)?
        .set_secondary_coord(x_range, y2_min..y2_max);

    let categories: &[String] = &data.categories;
    let y1_currency: bool = data.y1_currency;
    let y2_currency: bool = data.y2_currency;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(&data.x_desc)
        .y_desc(&data.y1_label)
        .x_labels(count.min(MAX_X_LABELS))
        .y_labels(10)
        .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .axis_desc_style(text_style(style, *style.label_font_size(), &text_color))
        .x_label_style(x_label_style(style, &text_color, rotate))
        .y_label_style(text_style(style, *style.label_font_size(), &primary_color))
        .x_label_formatter(&|x| category_label(categories, *x))
        .y_label_formatter(&|y| format_value_label(*y, y1_currency))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc(&data.y2_label)
        .y_labels(10)
        .label_style(text_style(style, *style.label_font_size(), &secondary_color))
        .axis_desc_style(text_style(style, *style.label_font_size(), &secondary_color))
        .y_label_formatter(&|y| format_value_label(*y, y2_currency))
        .draw()?;

    /* y1: bar (left axis) */
    chart
        .draw_series(data.y1_values.iter().enumerate().map(|(idx, value)| {
            let center: f64 = idx as f64;
            Rectangle::new(
                [(center - BAR_HALF_WIDTH, 0.0), (center + BAR_HALF_WIDTH, *value)],
                primary_color.mix(0.75).filled(),
            )
        }))?
        .label(&data.y1_label)
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 6), (x + 16, y + 6)], primary_color.mix(0.75).filled())
        });

    let y1_label_style: TextStyle = value_label_style(style, &text_color);
    chart.draw_series(data.y1_values.iter().enumerate().map(|(idx, value)| {
        EmptyElement::at((idx as f64, *value))
            + Text::new(
                format_value_label(*value, y1_currency),
                (0, -4),
                y1_label_style.clone(),
            )
    }))?;

    /* y2: line + marker (right axis) */
    chart
        .draw_secondary_series(LineSeries::new(
            data.y2_values
                .iter()
                .enumerate()
                .map(|(idx, v)| (idx as f64, *v)),
            secondary_color.stroke_width(3),
        ))?
        .label(&data.y2_label)
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], secondary_color.stroke_width(3))
        });

    chart.draw_secondary_series(
        data.y2_values
            .iter()
            .enumerate()
            .map(|(idx, v)| Circle::new((idx as f64, *v), 6, secondary_color.filled())),
    )?;

    let y2_label_style: TextStyle = value_label_style(style, &secondary_color);
    chart.draw_secondary_series(data.y2_values.iter().enumerate().map(|(idx, value)| {
        EmptyElement::at((idx as f64, *value))
            + Text::new(
                format_value_label(*value, y2_currency),
                (0, -10),
                y2_label_style.clone(),
            )
    }))?;

    /* 두 축 시리즈의 범례를 하나로 */
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&grid_color)
        .label_font(text_style(style, *style.label_font_size(), &text_color))
        .draw()?;

    Ok(())
}

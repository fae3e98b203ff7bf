/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Google Sheets 데이터를 읽어 bar / line / 이중 축 차트 이미지를 생성하는 에이전트

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::{openai_repository_impl::*, sheets_repository_impl::*};

mod env_configuration;

mod errors;

mod enums;

mod dto;

mod traits;

mod model;
use model::configs::{sheets_config::*, total_config::*};

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    chart_detect_service_impl::*, chart_service_impl::*, recommend_service_impl::*,
    table_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger();

    info!("Sheet chart agent start!");

    let sheets_config: &SheetsConfig = get_sheets_config_info();

    let sheet_id: String = sheets_config.resolve_sheet_id().unwrap_or_else(|e| {
        let err_msg: &str = "[main] Spreadsheet id is not configured.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    /* Google Sheets / LLM connection */
    let sheets_conn: SheetsRepositoryImpl = SheetsRepositoryImpl::new(sheets_config)
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing sheets_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    let llm_conn: OpenAiRepositoryImpl = OpenAiRepositoryImpl::new(get_llm_config_info())
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing llm_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let table_service: TableServiceImpl<SheetsRepositoryImpl> = TableServiceImpl::new(sheets_conn);
    let chart_detect_service: ChartDetectServiceImpl =
        ChartDetectServiceImpl::new(get_classifier_config_info().clone());
    let recommend_service: RecommendServiceImpl<OpenAiRepositoryImpl> =
        RecommendServiceImpl::new(llm_conn);
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(
        get_chart_style_config_info().clone(),
        get_classifier_config_info().magnitude_keywords().clone(),
    );

    let main_controller: MainController<
        TableServiceImpl<SheetsRepositoryImpl>,
        ChartDetectServiceImpl,
        RecommendServiceImpl<OpenAiRepositoryImpl>,
        ChartServiceImpl,
    > = MainController::new(
        table_service,
        chart_detect_service,
        recommend_service,
        chart_service,
        get_system_config_info().clone(),
        sheet_id,
        sheets_config.worksheet_name().to_string(),
    );

    match main_controller.main_task().await {
        Ok(output_path) => info!("Chart created: {}", output_path.display()),
        Err(e) => {
            error!("{:?}", e);
            panic!("{:?}", e)
        }
    }
}

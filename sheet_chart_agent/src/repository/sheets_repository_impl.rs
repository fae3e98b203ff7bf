use crate::common::*;

use crate::model::{configs::sheets_config::*, table::data_table::*};

use crate::dto::sheets::sheet_values_response::*;

use crate::errors::visualization_error::*;

use crate::traits::repository_traits::sheets_repository::*;

#[derive(Debug, Clone)]
pub struct SheetsRepositoryImpl {
    client: Client,
    api_base: String,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl SheetsRepositoryImpl {
    pub fn new(sheets_config: &SheetsConfig) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(*sheets_config.timeout_secs()))
            .build()
            .context("[SheetsRepositoryImpl->new] Failed to build http client")?;

        let api_key: Option<String> = sheets_config.resolve_api_key();
        let access_token: Option<String> = sheets_config.resolve_access_token();

        if api_key.is_none() && access_token.is_none() {
            warn!("[SheetsRepositoryImpl->new] No API key or access token configured. Only public sheets can be read.");
        }

        Ok(SheetsRepositoryImpl {
            client,
            api_base: sheets_config.api_base().trim_end_matches('/').to_string(),
            api_key,
            access_token,
        })
    }

    #[doc = "API key(쿼리 파라미터) 와 access token(Bearer 헤더) 을 요청에 붙여주는 함수"]
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request: RequestBuilder = match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        };

        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/* 숫자는 원시값, 날짜/시각은 표시 문자열 그대로 받아서 텍스트 컬럼으로 남긴다 */
pub const VALUES_QUERY: [(&str, &str); 3] = [
    ("valueRenderOption", "UNFORMATTED_VALUE"),
    ("dateTimeRenderOption", "FORMATTED_STRING"),
    ("majorDimension", "ROWS"),
];

#[doc = "워크시트 이름을 A1 표기법 range 로 변환 (작은따옴표로 감싸고 내부 따옴표는 이스케이프)"]
pub fn worksheet_range(worksheet_name: &str) -> String {
    format!("'{}'", worksheet_name.replace('\'', "''"))
}

#[doc = r#"
    Sheets API 의 실패 응답을 도메인 오류로 변환하는 함수.

    - 404: 스프레드시트가 존재하지 않음
    - 400 + "Unable to parse range": 워크시트가 존재하지 않음
    - 그 외: 상태코드와 본문을 포함한 일반 오류
"#]
pub fn map_sheets_error(
    status: StatusCode,
    body: &str,
    sheet_id: &str,
    worksheet_name: Option<&str>,
) -> anyhow::Error {
    let message: String = serde_json::from_str::<GoogleErrorResponse>(body)
        .map(|res| res.error.message)
        .unwrap_or_else(|_| body.to_string());

    if status == StatusCode::NOT_FOUND {
        return VisualizationError::NotFound {
            resource: format!("Spreadsheet with ID '{}'", sheet_id),
        }
        .into();
    }

    if let Some(worksheet) = worksheet_name {
        if status == StatusCode::BAD_REQUEST && message.contains("Unable to parse range") {
            return VisualizationError::NotFound {
                resource: format!("Worksheet '{}'", worksheet),
            }
            .into();
        }
    }

    anyhow!(
        "[Google Sheets Error] response status is failed: {} {}",
        status,
        message
    )
}

#[async_trait]
impl SheetsRepository for SheetsRepositoryImpl {
    #[doc = "Function that fetches all records of a worksheet - values.get"]
    async fn fetch_table(
        &self,
        sheet_id: &str,
        worksheet_name: &str,
    ) -> Result<DataTable, anyhow::Error> {
        let url: String = format!(
            "{}/spreadsheets/{}/values/{}",
            self.api_base,
            encode(sheet_id),
            encode(&worksheet_range(worksheet_name))
        );

        let response = self
            .authorize(self.client.get(&url))
            .query(&VALUES_QUERY)
            .send()
            .await
            .context("[SheetsRepositoryImpl->fetch_table] request failed")?;

        let status: StatusCode = response.status();

        if !status.is_success() {
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(map_sheets_error(
                status,
                &error_body,
                sheet_id,
                Some(worksheet_name),
            ));
        }

        let values_res: SheetValuesResponse = response
            .json::<SheetValuesResponse>()
            .await
            .context("[SheetsRepositoryImpl->fetch_table] Failed to parse values response")?;

        let table: DataTable = DataTable::from_sheet_values(worksheet_name, values_res.values())?;

        info!(
            "Successfully fetched {} rows from {}",
            table.row_count(),
            worksheet_name
        );

        Ok(table)
    }

    #[doc = "Function that lists worksheet titles of a spreadsheet"]
    async fn get_worksheet_names(&self, sheet_id: &str) -> Result<Vec<String>, anyhow::Error> {
        let url: String = format!("{}/spreadsheets/{}", self.api_base, encode(sheet_id));

        let response = self
            .authorize(self.client.get(&url))
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await
            .context("[SheetsRepositoryImpl->get_worksheet_names] request failed")?;

        let status: StatusCode = response.status();

        if !status.is_success() {
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(map_sheets_error(status, &error_body, sheet_id, None));
        }

        let meta: SpreadsheetMetaResponse = response.json::<SpreadsheetMetaResponse>().await?;

        Ok(meta
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }
}

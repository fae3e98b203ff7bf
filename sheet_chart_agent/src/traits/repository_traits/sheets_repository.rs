use crate::common::*;

use crate::model::table::data_table::*;

#[async_trait]
pub trait SheetsRepository: Send + Sync {
    #[doc = "
        스프레드시트의 특정 워크시트를 표로 가져온다
        # Errors
        * `NotFound` - 스프레드시트 또는 워크시트가 없는 경우
        * `EmptyData` - 레코드가 하나도 없는 경우
    "]
    async fn fetch_table(
        &self,
        sheet_id: &str,
        worksheet_name: &str,
    ) -> Result<DataTable, anyhow::Error>;

    async fn get_worksheet_names(&self, sheet_id: &str) -> Result<Vec<String>, anyhow::Error>;
}

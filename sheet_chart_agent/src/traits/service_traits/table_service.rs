use crate::common::*;

use crate::model::table::data_table::*;

#[async_trait]
pub trait TableService: Send + Sync {
    async fn fetch_table(&self, sheet_id: &str, worksheet_name: &str) -> anyhow::Result<DataTable>;
}

use crate::common::*;

use crate::errors::visualization_error::*;

use crate::model::table::data_table::*;

use crate::traits::{repository_traits::sheets_repository::*, service_traits::table_service::*};

#[derive(Debug, new)]
pub struct TableServiceImpl<R: SheetsRepository> {
    sheets_repository: R,
}

#[async_trait]
impl<R: SheetsRepository> TableService for TableServiceImpl<R> {
    #[doc = r#"
        워크시트 전체 레코드를 표로 가져오는 함수.
        워크시트를 찾지 못한 경우 선택 가능한 워크시트 목록을 로그로 남기고 오류를 그대로 반환한다.
    "#]
    async fn fetch_table(&self, sheet_id: &str, worksheet_name: &str) -> anyhow::Result<DataTable> {
        let fetch_result: anyhow::Result<DataTable> = self
            .sheets_repository
            .fetch_table(sheet_id, worksheet_name)
            .await;

        let err: anyhow::Error = match fetch_result {
            Ok(table) => return Ok(table),
            Err(e) => e,
        };

        let worksheet_missing: bool = matches!(
            err.downcast_ref::<VisualizationError>(),
            Some(VisualizationError::NotFound { resource }) if resource.starts_with("Worksheet")
        );

        if worksheet_missing {
            match self.sheets_repository.get_worksheet_names(sheet_id).await {
                Ok(names) => {
                    error!(
                        "[TableServiceImpl->fetch_table] Worksheet '{}' not found. Available worksheets: {:?}",
                        worksheet_name, names
                    );
                }
                Err(e) => {
                    warn!(
                        "[TableServiceImpl->fetch_table] Failed to list worksheets: {:?}",
                        e
                    );
                }
            }
        }

        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSheetsRepository {
        result: Result<DataTable, VisualizationError>,
        list_calls: AtomicUsize,
    }

    impl FakeSheetsRepository {
        fn returning(result: Result<DataTable, VisualizationError>) -> Self {
            FakeSheetsRepository {
                result,
                list_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SheetsRepository for FakeSheetsRepository {
        async fn fetch_table(
            &self,
            _sheet_id: &str,
            _worksheet_name: &str,
        ) -> Result<DataTable, anyhow::Error> {
            self.result.clone().map_err(anyhow::Error::from)
        }

        async fn get_worksheet_names(&self, _sheet_id: &str) -> Result<Vec<String>, anyhow::Error> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["Sheet1".to_string(), "Q3".to_string()])
        }
    }

    #[tokio::test]
    async fn returns_fetched_table() {
        let table: DataTable = DataTable::new(vec![
            Column::text("Month", vec!["Jan".into()]),
            Column::numeric("Revenue", vec![1000.0]),
        ])
        .unwrap();
        let service = TableServiceImpl::new(FakeSheetsRepository::returning(Ok(table.clone())));

        assert_eq!(service.fetch_table("id", "Sheet1").await.unwrap(), table);
        assert_eq!(service.sheets_repository.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_worksheet_lists_available_names() {
        let service = TableServiceImpl::new(FakeSheetsRepository::returning(Err(
            VisualizationError::NotFound {
                resource: "Worksheet 'Q4'".to_string(),
            },
        )));

        let err: anyhow::Error = service.fetch_table("id", "Q4").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VisualizationError>(),
            Some(VisualizationError::NotFound { .. })
        ));
        assert_eq!(service.sheets_repository.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_worksheet_is_propagated() {
        let service = TableServiceImpl::new(FakeSheetsRepository::returning(Err(
            VisualizationError::EmptyData {
                worksheet: "Sheet1".to_string(),
            },
        )));

        let err: anyhow::Error = service.fetch_table("id", "Sheet1").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VisualizationError>(),
            Some(VisualizationError::EmptyData { .. })
        ));
        assert_eq!(service.sheets_repository.list_calls.load(Ordering::SeqCst), 0);
    }
}

use crate::enums::chart_kind::*;

use thiserror::Error;

#[doc = "스프레드시트 조회 ~ 차트 렌더링 과정에서 발생하는 도메인 오류"]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VisualizationError {
    #[error("No numeric columns found for visualization")]
    NoNumericData,

    #[error("[{kind}] column '{column}' does not exist in the table")]
    ColumnNotFound { column: String, kind: ChartKind },

    #[error("[{kind}] column '{column}' is not numeric")]
    NonNumericColumn { column: String, kind: ChartKind },

    #[error("[{kind}] invalid chart spec: {reason}")]
    InvalidChartSpec { kind: ChartKind, reason: String },

    #[error("No data found in worksheet: {worksheet}")]
    EmptyData { worksheet: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("column '{column}' appears more than once")]
    DuplicateColumn { column: String },

    #[error("'{name}' is not configured and not present in the environment")]
    MissingCredential { name: String },
}

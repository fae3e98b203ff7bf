pub use chrono::{DateTime, Local};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{Client, RequestBuilder, StatusCode};
pub use urlencoding::encode;

pub use std::{
    env,
    fmt::{self, Display},
    fs,
    io::Write,
    path::{Path, PathBuf},
};

pub use tokio::time::Duration;

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::{Value, json};

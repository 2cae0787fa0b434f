///! Container types for asset records and the shared error type
use thiserror::Error;

pub mod article_number;
pub mod asset;
pub mod country;

pub use article_number::{ArticleNumber, ArticleNumberError};
pub use asset::Asset;
pub use country::{CountryCode, CountryError};

/// Error related to asset data and its persistence
#[derive(Error, Debug)]
pub enum DataError {
    #[error("invalid asset data: {0}")]
    InvalidAsset(String),
    #[error("{0}")]
    NotFound(String),
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
    #[error("no asset files found")]
    NoAssetFiles,
    #[error("invalid country code: {0}")]
    InvalidCountry(#[from] CountryError),
    #[error("invalid article number: {0}")]
    InvalidArticleNumber(#[from] ArticleNumberError),
    #[error("asset file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

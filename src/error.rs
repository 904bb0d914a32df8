use thiserror::Error;

#[derive(Error, Debug)]
pub enum YatraError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("No user with id '{0}'")]
    UnknownUser(String),

    #[error("No data selected: please select at least one row to export")]
    NoDataSelected,
}

pub type YcResult<T> = Result<T, YatraError>;

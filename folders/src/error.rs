use thiserror::Error;

/// Failures of the underlying folder record source.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Failed to read folder data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Folder data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Folder data source panicked: {0}")]
    Panicked(String),
}

#[derive(Error, Debug)]
pub enum FolderError {
    #[error("Failed to fetch folder data: {0}")]
    DataSource(#[from] DataSourceError),
    #[error("Invalid pagination parameters: startIndex={start_index}, pageSize={page_size}")]
    InvalidPagination { start_index: i64, page_size: i64 },
    #[error("startIndex {start_index} is beyond the length of the folder list ({count})")]
    OutOfRange { start_index: i64, count: usize },
}

pub type Result<T> = std::result::Result<T, FolderError>;

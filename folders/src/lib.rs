mod data_source;
mod error;
mod folder;
pub mod sample;
mod service;

pub use data_source::{fetch_guarded, DataSource, JsonFileDataSource, StaticDataSource};
pub use error::*;
pub use folder::*;
pub use service::{FolderQueryService, Pagination};

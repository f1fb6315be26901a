mod config;
mod consts;

extern crate pretty_env_logger;
#[macro_use]
extern crate log;

use crate::config::Config;
use folders::sample::generate_data;
use folders::{
    DataSource, FetchFolderRequest, FetchFolderResponse, FolderQueryService, JsonFileDataSource,
    StaticDataSource,
};
use serde::Serialize;

#[derive(Serialize)]
struct PageOutput<'a> {
    #[serde(flatten)]
    response: &'a FetchFolderResponse,
    next_index: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();

    let config = Config::from_env()?;
    info!("Starting folder query for org {}", config.org_id);

    let source: Box<dyn DataSource> = match &config.sample_path {
        Some(path) => {
            info!("Reading folders from {}", path.display());
            Box::new(JsonFileDataSource::new(path))
        }
        None => {
            info!("No sample document configured, generating folder data");
            Box::new(StaticDataSource::new(generate_data(config.org_id)))
        }
    };

    let service = FolderQueryService::new(source);
    let req = FetchFolderRequest::new(config.org_id);

    let (response, next_index) = service
        .get_folders_paginated(&req, config.start_index, config.page_size)
        .await?;

    debug!(
        "Fetched {} folders, next index is {}",
        response.folders.len(),
        next_index
    );

    let output = PageOutput {
        response: &response,
        next_index,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

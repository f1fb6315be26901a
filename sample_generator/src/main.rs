use anyhow::Context;
use folders::sample::generate_data;
use folders::DEFAULT_ORG_ID;
use log::info;
use std::path::{Path, PathBuf};

const ENV_SAMPLE_PATH: &str = "FOLDERS_SAMPLE_PATH";
const DEFAULT_SAMPLE_PATH: &str = "data/sample.json";

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();

    let file_path = std::env::var(ENV_SAMPLE_PATH)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_PATH));

    write_sample(&file_path)
}

fn write_sample(file_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let folders = generate_data(DEFAULT_ORG_ID);

    let file = std::fs::File::create(file_path)
        .with_context(|| format!("Failed to create sample file {}", file_path.display()))?;
    serde_json::to_writer_pretty(file, &folders).context("Failed to write sample data")?;

    info!(
        "Wrote {} folders to {}",
        folders.len(),
        file_path.display()
    );
    Ok(())
}

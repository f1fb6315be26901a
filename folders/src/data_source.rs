use crate::error::DataSourceError;
use crate::folder::Folder;
use async_trait::async_trait;
use futures::FutureExt;
use log::{debug, warn};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};

/// Supplies the full, unfiltered list of folders in a stable order.
///
/// Implementations must fail explicitly rather than return an empty list when
/// the records cannot be produced.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Folder>, DataSourceError>;
}

#[async_trait]
impl<T> DataSource for Box<T>
where
    T: DataSource + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<Folder>, DataSourceError> {
        (**self).fetch_all().await
    }
}

/// Reads a JSON array of folders from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileDataSource {
    path: PathBuf,
}

impl JsonFileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonFileDataSource {
    async fn fetch_all(&self) -> Result<Vec<Folder>, DataSourceError> {
        debug!("Reading folder data from {}", self.path.display());
        let content = tokio::fs::read(&self.path).await?;
        let folders: Vec<Folder> = serde_json::from_slice(&content)?;
        debug!("Loaded {} folders from {}", folders.len(), self.path.display());

        Ok(folders)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    folders: Vec<Folder>,
}

impl StaticDataSource {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch_all(&self) -> Result<Vec<Folder>, DataSourceError> {
        Ok(self.folders.clone())
    }
}

/// Runs the source to completion, turning a panic inside it into
/// [`DataSourceError::Panicked`].
pub async fn fetch_guarded<S>(source: &S) -> Result<Vec<Folder>, DataSourceError>
where
    S: DataSource + ?Sized,
{
    match AssertUnwindSafe(source.fetch_all()).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("Folder data source panicked: {}", message);
            Err(DataSourceError::Panicked(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::DEFAULT_ORG_ID;
    use uuid::Uuid;

    struct PanickingSource;

    #[async_trait]
    impl DataSource for PanickingSource {
        async fn fetch_all(&self) -> Result<Vec<Folder>, DataSourceError> {
            panic!("sample data unavailable");
        }
    }

    fn temp_file(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("folders-{}.json", Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_folders_from_file_in_order() {
        let path = temp_file(
            r#"[
                {"id": "00001d65-d336-485a-8331-7b53f37e8f51", "name": "first", "org_id": "c1556e17-b7c0-45a3-a6ae-9546248fb17a", "deleted": false},
                {"id": "00001d65-d336-485a-8331-7b53f37e8f52", "name": "second", "org_id": "c1556e17-b7c0-45a3-a6ae-9546248fb17a", "deleted": true}
            ]"#,
        );

        let folders = JsonFileDataSource::new(&path).fetch_all().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].name, "first");
        assert_eq!(folders[1].name, "second");
        assert!(folders.iter().all(|f| f.org_id == DEFAULT_ORG_ID));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", Uuid::new_v4()));

        let result = JsonFileDataSource::new(path).fetch_all().await;

        assert!(matches!(result, Err(DataSourceError::Io(_))));
    }

    #[tokio::test]
    async fn malformed_json_is_reported() {
        let path = temp_file("[{\"id\": ");

        let result = JsonFileDataSource::new(&path).fetch_all().await;
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DataSourceError::Malformed(_))));
    }

    #[tokio::test]
    async fn malformed_uuid_is_reported() {
        let path = temp_file(
            r#"[{"id": "nope", "name": "x", "org_id": "c1556e17-b7c0-45a3-a6ae-9546248fb17a", "deleted": false}]"#,
        );

        let result = JsonFileDataSource::new(&path).fetch_all().await;
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DataSourceError::Malformed(_))));
    }

    #[tokio::test]
    async fn guarded_fetch_converts_panics() {
        let result = fetch_guarded(&PanickingSource).await;

        match result {
            Err(DataSourceError::Panicked(message)) => {
                assert_eq!(message, "sample data unavailable")
            }
            other => panic!("expected a panic to be reported, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn guarded_fetch_passes_through_boxed_sources() {
        let folder = Folder {
            id: Uuid::new_v4(),
            name: "boxed".to_string(),
            org_id: DEFAULT_ORG_ID,
            deleted: false,
        };
        let source: Box<dyn DataSource> = Box::new(StaticDataSource::new(vec![folder.clone()]));

        let folders = fetch_guarded(&source).await.unwrap();

        assert_eq!(folders, vec![folder]);
    }
}

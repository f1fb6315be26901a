use crate::data_source::{fetch_guarded, DataSource};
use crate::error::{FolderError, Result};
use crate::folder::{FetchFolderRequest, FetchFolderResponse, Folder};
use log::{debug, warn};
use uuid::Uuid;

/// Decoded pagination bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// The `(-1, -1)` sentinel: every matching folder.
    All,
    Range { start: usize, size: usize },
}

impl Pagination {
    pub fn from_raw(start_index: i64, page_size: i64) -> Result<Self> {
        match (start_index, page_size) {
            (-1, -1) => Ok(Pagination::All),
            (start, size) if start >= 0 && size >= 0 => Ok(Pagination::Range {
                start: usize::try_from(start).unwrap_or(usize::MAX),
                size: usize::try_from(size).unwrap_or(usize::MAX),
            }),
            _ => Err(FolderError::InvalidPagination {
                start_index,
                page_size,
            }),
        }
    }

    /// Cuts the page out of `items`, returning it with the index the next page
    /// starts at. `None` when the start lies past the end of `items`.
    pub fn page<T>(self, mut items: Vec<T>) -> Option<(Vec<T>, usize)> {
        let count = items.len();
        match self {
            Pagination::All => Some((items, count)),
            Pagination::Range { start, .. } if start > count => None,
            Pagination::Range { start, size } => {
                let end = start.saturating_add(size).min(count);
                items.truncate(end);
                Some((items.split_off(start), end))
            }
        }
    }
}

/// Filters the folders of a [`DataSource`] by organisation.
///
/// Holds no state besides the injected source; every call rescans the full
/// data set.
pub struct FolderQueryService<S> {
    source: S,
}

impl<S> FolderQueryService<S>
where
    S: DataSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All folders of `org_id`, in data set order. Deleted folders are included.
    pub async fn fetch_all_by_org(&self, org_id: &Uuid) -> Result<Vec<Folder>> {
        debug!("Fetching folders for org {}", org_id);
        let folders = fetch_guarded(&self.source).await?;

        let matching: Vec<Folder> = folders
            .into_iter()
            .filter(|folder| folder.org_id == *org_id)
            .collect();

        debug!("Found {} folders for org {}", matching.len(), org_id);
        Ok(matching)
    }

    /// One page of the folders of `org_id` plus the start index of the next page.
    ///
    /// `(-1, -1)` returns everything with the total count as next index. Any
    /// other negative value is rejected before the data source is touched.
    /// A start equal to the number of matches yields an empty last page.
    pub async fn fetch_page(
        &self,
        org_id: &Uuid,
        start_index: i64,
        page_size: i64,
    ) -> Result<(Vec<Folder>, usize)> {
        let pagination = Pagination::from_raw(start_index, page_size).map_err(|e| {
            warn!("Rejected pagination for org {}: {}", org_id, e);
            e
        })?;

        let folders = self.fetch_all_by_org(org_id).await?;
        let count = folders.len();

        pagination.page(folders).ok_or_else(|| {
            warn!(
                "startIndex {} is beyond the {} folders of org {}",
                start_index, count, org_id
            );
            FolderError::OutOfRange { start_index, count }
        })
    }

    pub async fn get_all_folders(&self, req: &FetchFolderRequest) -> Result<FetchFolderResponse> {
        let folders = self.fetch_all_by_org(&req.org_id).await?;
        Ok(FetchFolderResponse { folders })
    }

    pub async fn get_folders_paginated(
        &self,
        req: &FetchFolderRequest,
        start_index: i64,
        page_size: i64,
    ) -> Result<(FetchFolderResponse, usize)> {
        let (folders, next_index) = self.fetch_page(&req.org_id, start_index, page_size).await?;
        Ok((FetchFolderResponse { folders }, next_index))
    }
}

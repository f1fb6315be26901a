use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

pub const DEFAULT_ORG_ID: Uuid = uuid!("c1556e17-b7c0-45a3-a6ae-9546248fb17a");

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Folder {
    /// Unique identifier of the folder
    pub id: Uuid,
    /// Display name, not unique
    pub name: String,
    /// The organisation the folder belongs to
    pub org_id: Uuid,
    /// Soft delete marker. Queries do not filter on it.
    pub deleted: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct FetchFolderRequest {
    pub org_id: Uuid,
}

impl FetchFolderRequest {
    pub fn new(org_id: Uuid) -> Self {
        Self { org_id }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct FetchFolderResponse {
    pub folders: Vec<Folder>,
}

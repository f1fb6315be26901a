pub const ENV_SAMPLE_PATH: &str = "FOLDERS_SAMPLE_PATH";
pub const ENV_ORG_ID: &str = "FOLDERS_ORG_ID";
pub const ENV_START_INDEX: &str = "FOLDERS_START_INDEX";
pub const ENV_PAGE_SIZE: &str = "FOLDERS_PAGE_SIZE";

pub const DEFAULT_START_INDEX: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

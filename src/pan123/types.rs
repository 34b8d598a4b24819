use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `Type` value the remote uses for directories
pub const FOLDER_TYPE: i32 = 1;

/// Envelope present at the top level of every response
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BaseResp {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResp {
    #[serde(flatten)]
    pub base: BaseResp,
    #[serde(default)]
    pub data: Option<TokenData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenData {
    #[serde(default)]
    pub token: String,
}

/// A file or folder as the remote lists it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pan123File {
    pub file_name: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub update_at: Option<DateTime<Utc>>,
    pub file_id: i64,
    #[serde(rename = "Type", default)]
    pub file_type: i32,
    #[serde(default)]
    pub etag: String,
    #[serde(default)]
    pub s3_key_flag: String,
}

impl Pan123File {
    pub fn is_folder(&self) -> bool {
        self.file_type == FOLDER_TYPE
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FilesResp {
    pub data: FilesData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FilesData {
    #[serde(rename = "InfoList", default)]
    pub info_list: Vec<Pan123File>,
    #[serde(rename = "Next")]
    pub next: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DownResp {
    pub data: DownData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DownData {
    #[serde(rename = "DownloadUrl")]
    pub download_url: String,
}

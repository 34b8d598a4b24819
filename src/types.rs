use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider-agnostic file entry handed to the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Remote identifier in string form
    pub id: String,
    /// Display name
    pub name: String,
    /// Size in bytes
    pub size: i64,
    /// Folder, or the category inferred from the extension
    pub file_type: FileType,
    /// Name of the driver that produced this entry
    pub driver: String,
    /// Last update time, when the remote reports one
    pub updated_at: Option<DateTime<Utc>>,
}

impl File {
    pub fn is_folder(&self) -> bool {
        self.file_type == FileType::Folder
    }
}

/// Semantic category of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Unknown,
    Folder,
    Office,
    Video,
    Audio,
    Text,
    Image,
}

impl FileType {
    /// Infer the category from a file name's extension.
    ///
    /// Never returns `Folder`; that category is reserved for entries the
    /// remote marks as directories.
    pub fn from_name(name: &str) -> Self {
        let Some(mime) = mime_guess::from_path(name).first() else {
            return FileType::Unknown;
        };

        match mime.type_().as_str() {
            "video" => FileType::Video,
            "audio" => FileType::Audio,
            "image" => FileType::Image,
            "text" => FileType::Text,
            "application" if is_office(mime.subtype().as_str()) => FileType::Office,
            _ => FileType::Unknown,
        }
    }
}

fn is_office(subtype: &str) -> bool {
    subtype == "pdf"
        || subtype == "msword"
        || subtype.starts_with("vnd.ms-")
        || subtype.starts_with("vnd.openxmlformats-officedocument")
        || subtype.starts_with("vnd.oasis.opendocument")
}

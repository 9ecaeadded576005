use google_drive3::api::File;
use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the identity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInfo {
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpreadsheetFile {
    pub id: String,
    pub name: String,
}

impl SpreadsheetFile {
    /// Convert a Drive file listing entry, skipping entries without an ID
    pub fn from_drive_file(file: File) -> Option<Self> {
        let id = file.id.filter(|id| !id.is_empty())?;
        Some(SpreadsheetFile {
            id,
            name: file.name.unwrap_or_default(),
        })
    }
}

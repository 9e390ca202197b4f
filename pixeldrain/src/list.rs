//! Lists (albums) of files.
use reqwest::Method;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{file::FileInfo, path::PathArg, Client};

/// A list of files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct ListInfo {
    /// Public id.
    pub id: String,
    /// Title.
    pub title: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
    /// Number of files. Set even when [`ListInfo::files`] is left out, as
    /// in [`Client::user_lists`].
    #[serde(default)]
    pub file_count: u64,
    /// The files, in order.
    #[serde(default)]
    pub files: Vec<ListFile>,
    /// The requester may edit the list.
    #[serde(default)]
    pub can_edit: bool,
}

/// A file in a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListFile {
    /// Description of the file within this list.
    #[serde(default)]
    pub description: String,
    /// Path of the file info, relative to the API endpoint.
    #[serde(default)]
    pub detail_href: String,
    /// The file itself.
    #[serde(flatten)]
    pub info: FileInfo,
}

impl Client {
    /// Get a list.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - list doesn't exist
    pub async fn list(&self, id: &str) -> crate::Result<ListInfo> {
        self.json(Method::GET, &format!("list/{}", PathArg(id)))
            .await
    }
}

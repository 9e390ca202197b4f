//! The filesystem: buckets of directories and files.
use std::collections::HashMap;

use reqwest::Method;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{api::MaybeUnknown, path::PathArg, Client};

/// A bucket holds a filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Bucket {
    /// Display name.
    pub name: String,
    /// Bucket id, the first component of every path in the bucket.
    pub id: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
    /// Last modification time.
    #[serde(with = "time::serde::rfc3339")]
    pub date_modified: OffsetDateTime,
    /// Password needed for reading, if any.
    #[serde(default)]
    pub read_password: String,
    /// Password needed for writing, if any.
    #[serde(default)]
    pub write_password: String,
    /// Free-form properties.
    #[serde(default)]
    pub properties: HashMap<String, String>,
    /// What the requester may do.
    pub permissions: Permissions,
}

/// A bucket with all nodes leading up to the requested node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct FilesystemPath {
    /// The bucket containing the node.
    pub bucket: Bucket,
    /// Ancestors of the node, outermost first.
    #[serde(default)]
    pub parents: Vec<FilesystemNode>,
    /// The requested node.
    pub base: FilesystemNode,
}

/// Kind of a [`FilesystemNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Root of a bucket.
    Bucket,
    /// Directory.
    Dir,
    /// Regular file.
    File,
}

/// A file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct FilesystemNode {
    /// Kind of node.
    #[serde(rename = "type")]
    pub typ: MaybeUnknown<NodeType>,
    /// Full path, starting with the bucket id.
    pub path: String,
    /// Last path component.
    pub name: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
    /// Last modification time.
    #[serde(with = "time::serde::rfc3339")]
    pub date_modified: OffsetDateTime,

    /// Size in bytes, for files.
    #[serde(default)]
    pub file_size: i64,
    /// MIME type, for files.
    #[serde(default)]
    pub file_type: String,

    /// Children, for directories.
    #[serde(default)]
    pub children: Vec<FilesystemNode>,
}

impl FilesystemNode {
    /// Is this a directory (or bucket root)?
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(
            self.typ,
            MaybeUnknown::Known(NodeType::Dir | NodeType::Bucket)
        )
    }
}

/// The actions a user can perform on an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Permissions {
    /// Create children.
    pub create: bool,
    /// Read.
    pub read: bool,
    /// Modify.
    pub update: bool,
    /// Delete.
    pub delete: bool,
}

impl Client {
    /// List the buckets of the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    pub async fn buckets(&self) -> crate::Result<Vec<Bucket>> {
        self.json(Method::GET, "filesystem").await
    }

    /// Stat a path, like `<bucket id>/photos/cat.jpg`. The whole path is
    /// sent as one escaped segment.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - path doesn't exist
    /// - no read permission
    pub async fn filesystem_path(&self, path: &str) -> crate::Result<FilesystemPath> {
        self.json(Method::GET, &format!("filesystem/{}?stat", PathArg(path)))
            .await
    }
}

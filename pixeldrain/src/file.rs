//! Files: metadata, downloads and uploads.
use std::collections::HashMap;

use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use reqwest::{Body, Method};
use serde::Deserialize;
use serde_with::serde_as;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::instrument;

use crate::{
    path::PathArg,
    range::ByteRange,
    serde::{OptDateTime, Rfc3339 as Rfc3339As},
    Client,
};

/// Returned when a file has been successfully uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileId {
    /// Public id of the new file.
    pub id: String,
}

/// Public information about a file.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::struct_excessive_bools, clippy::module_name_repetitions)]
pub struct FileInfo {
    /// Public id.
    pub id: String,
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Number of views.
    pub views: u64,
    /// Bytes downloaded in total.
    pub bandwidth_used: u64,
    /// Bytes downloaded by paying users.
    #[serde(default)]
    pub bandwidth_used_paid: u64,
    /// Number of full downloads.
    pub downloads: u64,
    /// Upload time.
    #[serde(with = "time::serde::rfc3339")]
    pub date_upload: OffsetDateTime,
    /// Last time someone viewed the file.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub date_last_view: Option<OffsetDateTime>,
    /// MIME type, like `image/png`.
    pub mime_type: String,
    /// Path of the thumbnail, relative to the API endpoint.
    pub thumbnail_href: String,
    /// Hex encoded SHA-256 of the content.
    #[serde(default)]
    pub hash_sha256: String,

    /// Deleted after this date.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub delete_after_date: Option<OffsetDateTime>,
    /// Deleted after this many downloads. Zero for never.
    #[serde(default)]
    pub delete_after_downloads: u64,

    /// Availability, empty if the file is available.
    #[serde(default)]
    pub availability: String,
    /// Why the file isn't available.
    #[serde(default)]
    pub availability_message: String,
    /// Type of abuse the file was reported for.
    #[serde(default)]
    pub abuse_type: String,
    /// Who reported the file.
    #[serde(default)]
    pub abuse_reporter_name: String,

    /// Custom file viewer branding.
    #[serde(default)]
    pub branding: HashMap<String, String>,

    /// The requester may edit the file.
    #[serde(default)]
    pub can_edit: bool,
    /// The requester may download the file.
    #[serde(default)]
    pub can_download: bool,
    /// Whether ads are shown to the requester.
    #[serde(default)]
    pub show_ads: bool,
    /// Whether the video player is enabled for the requester.
    #[serde(default)]
    pub allow_video_player: bool,
    /// Download speed limit for the requester, in bytes per second. Zero
    /// for unlimited.
    #[serde(default)]
    pub download_speed_limit: u64,
    /// Whether links go straight to the download.
    #[serde(default)]
    pub skip_file_viewer: bool,
}

/// Historic statistics of a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileTimeSeries {
    /// Views per interval.
    pub views: TimeSeries,
    /// Downloads per interval.
    pub downloads: TimeSeries,
    /// Bytes transferred per interval.
    pub bandwidth: TimeSeries,
    /// Bytes transferred to paying users per interval.
    #[serde(default)]
    pub bandwidth_paid: TimeSeries,
}

/// Data captured over a time span. `timestamps[i]` belongs to `amounts[i]`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimeSeries {
    /// Start of each interval.
    #[serde(default)]
    #[serde_as(as = "Vec<Rfc3339As>")]
    pub timestamps: Vec<OffsetDateTime>,
    /// Value of each interval.
    #[serde(default)]
    pub amounts: Vec<u64>,
}

impl TimeSeries {
    /// Pair up timestamps and amounts.
    pub fn iter(&self) -> impl Iterator<Item = (OffsetDateTime, u64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.amounts.iter().copied())
    }
}

impl Client {
    /// Open a stream to the content of a file.
    ///
    /// # Errors
    ///
    /// - file doesn't exist
    /// - file is blocked
    /// - network errors
    pub async fn download_file(
        &self,
        id: &str,
    ) -> crate::Result<impl Stream<Item = crate::Result<Bytes>>> {
        let res = self.raw(&format!("file/{}", PathArg(id)), None).await?;

        Ok(res.bytes_stream().map_err(Into::into))
    }

    /// Open a stream to part of a file.
    ///
    /// # Errors
    ///
    /// - file doesn't exist
    /// - range is larger than the file itself
    /// - network errors
    pub async fn download_file_range(
        &self,
        id: &str,
        range: ByteRange,
    ) -> crate::Result<impl Stream<Item = crate::Result<Bytes>>> {
        let res = self
            .raw(&format!("file/{}", PathArg(id)), Some(range))
            .await?;

        Ok(res.bytes_stream().map_err(Into::into))
    }

    /// Get information about a file.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - file doesn't exist
    pub async fn file_info(&self, id: &str) -> crate::Result<FileInfo> {
        self.json(Method::GET, &format!("file/{}/info", PathArg(id)))
            .await
    }

    /// Add a view to a file. `view_token` comes from [`Client::view_token`].
    ///
    /// # Errors
    ///
    /// - network errors
    /// - invalid view token
    pub async fn add_file_view(&self, id: &str, view_token: &str) -> crate::Result<()> {
        self.form_empty(
            Method::POST,
            &format!("file/{}/view", PathArg(id)),
            &[("token", view_token)],
        )
        .await
    }

    /// Upload a file. When logged in the file is added to the account.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - file too large
    /// - name too long
    pub async fn upload_file(&self, name: &str, body: impl Into<Body>) -> crate::Result<FileId> {
        self.upload(Method::PUT, &format!("file/{}", PathArg(name)), body.into())
            .await
    }

    /// Delete a file owned by the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - file doesn't exist or isn't owned by the user
    pub async fn delete_file(&self, id: &str) -> crate::Result<()> {
        self.empty(Method::DELETE, &format!("file/{}", PathArg(id)))
            .await
    }

    /// Statistics of a file between `start` and `end`, bucketed in
    /// intervals of `interval_minutes`.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - file doesn't exist
    /// - interval too small for the time span
    #[instrument(skip(self))]
    pub async fn file_time_series(
        &self,
        id: &str,
        start: OffsetDateTime,
        end: OffsetDateTime,
        interval_minutes: u32,
    ) -> crate::Result<FileTimeSeries> {
        let res = Self::send(
            self.request(Method::GET, &format!("file/{}/timeseries", PathArg(id)))?
                .query(&[
                    ("start", start.format(&Rfc3339)?),
                    ("end", end.format(&Rfc3339)?),
                    ("interval", interval_minutes.to_string()),
                ]),
        )
        .await?;

        crate::api::read_json(res).await
    }
}

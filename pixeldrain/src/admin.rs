//! Admin operations and abuse report records. All of these require an
//! admin account.
use reqwest::Method;
use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{api::MaybeUnknown, file::FileInfo, serde::OptDateTime, Client};

/// A global setting of the back-end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AdminGlobal {
    /// Setting name.
    pub key: String,
    /// Setting value.
    pub value: String,
}

/// The files which were blocked by [`Client::admin_block_files`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AdminBlockFiles {
    /// Ids of the blocked files.
    #[serde(default)]
    pub files_blocked: Vec<String>,
}

/// Kinds of abuse a file can be reported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AbuseType {
    /// Copyright infringement.
    Copyright,
    /// Child abuse material.
    ChildAbuse,
    /// Terrorist propaganda.
    Terrorism,
    /// Gore.
    Gore,
    /// Malware.
    Malware,
}

/// State of an abuse report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportStatus {
    /// Not reviewed yet.
    Pending,
    /// Reviewed, file stays up.
    Rejected,
    /// Reviewed, file was blocked.
    Granted,
}

/// An e-mail address which is allowed to send abuse reports by mail.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AdminAbuseReporter {
    /// Sender address.
    pub from_address: String,
    /// Mail server the reports arrive through.
    pub mail_server: String,
    /// Name of the reporter.
    pub name: String,
    /// Whether the reporter is trusted or pending.
    pub status: String,
    /// When the reporter was added.
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    /// Number of reports sent.
    pub reports_sent: u64,
    /// Number of files blocked through this reporter.
    pub files_blocked: u64,
    /// Last report.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub last_used: Option<OffsetDateTime>,
}

/// All reports for one file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AdminAbuseReportContainer {
    /// Container id.
    pub id: Uuid,
    /// The individual reports.
    #[serde(default)]
    pub reports: Vec<AdminAbuseReport>,
    /// The reported file.
    pub file: FileInfo,
    /// Most reported abuse type.
    #[serde(rename = "type")]
    pub typ: MaybeUnknown<AbuseType>,
    /// Review state.
    pub status: MaybeUnknown<ReportStatus>,
    /// Time of the first report.
    #[serde(with = "time::serde::rfc3339")]
    pub first_report_time: OffsetDateTime,
}

/// A report someone submitted for a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AdminAbuseReport {
    /// Internal id of the file instance.
    #[serde(rename = "file_id")]
    pub file_instance_id: Uuid,
    /// Address of the reporter.
    pub ip_address: String,
    /// When the report was made.
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    /// Review state.
    pub status: MaybeUnknown<ReportStatus>,
    /// Reported abuse type.
    #[serde(rename = "type")]
    pub typ: MaybeUnknown<AbuseType>,
    /// Contact address of the reporter.
    #[serde(default)]
    pub email: String,
}

/// A banned address with its offences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AdminIpBan {
    /// Banned address or subnet.
    pub address: String,
    /// Why it was banned.
    #[serde(default)]
    pub offences: Vec<AdminIpBanOffence>,
}

/// One reason for an [`AdminIpBan`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct AdminIpBanOffence {
    /// When the ban started.
    #[serde(with = "time::serde::rfc3339")]
    pub ban_time: OffsetDateTime,
    /// When the ban ends.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub expire_time: Option<OffsetDateTime>,
    /// Reason, usually an abuse type.
    pub reason: String,
    /// Who reported the offending file.
    pub reporter: String,
    /// Internal id of the offending file.
    pub file_id: Uuid,
    /// Public id of the offending file.
    pub file_public_id: String,
    /// Name of the offending file.
    pub file_name: String,
}

impl Client {
    /// Get all global settings.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not an admin
    pub async fn admin_globals(&self) -> crate::Result<Vec<AdminGlobal>> {
        self.json(Method::GET, "admin/globals").await
    }

    /// Set a global setting.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not an admin
    /// - unknown key
    pub async fn admin_set_global(&self, key: &str, value: &str) -> crate::Result<()> {
        self.form_empty(
            Method::POST,
            "admin/globals",
            &[("key", key), ("value", value)],
        )
        .await
    }

    /// Block files from being downloaded. `text` is scanned for file ids,
    /// so a whole abuse e-mail can be pasted in. `abuse_type` is one of the
    /// [`AbuseType`] values, e.g. `AbuseType::Copyright.to_string()`.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not an admin
    pub async fn admin_block_files(
        &self,
        text: &str,
        abuse_type: &str,
        reporter: &str,
    ) -> crate::Result<AdminBlockFiles> {
        self.form(
            Method::POST,
            "admin/block_files",
            &[("text", text), ("type", abuse_type), ("reporter", reporter)],
        )
        .await
    }
}

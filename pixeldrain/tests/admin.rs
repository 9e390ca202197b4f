mod common;

use mockito::Matcher;
use pixeldrain::{
    admin::{AbuseType, AdminAbuseReportContainer, AdminIpBan, ReportStatus},
    api::MaybeUnknown,
};
use serde_json::json;

use common::{client, file_info, server, BASIC_KEY};

#[tokio::test]
async fn globals() {
    let mut server = server().await;

    server
        .mock("GET", "/admin/globals")
        .match_header("authorization", BASIC_KEY)
        .with_body(
            json!([
                { "key": "maintenance_mode", "value": "false" },
                { "key": "max_upload_size", "value": "21474836480" }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let set = server
        .mock("POST", "/admin/globals")
        .match_header("authorization", BASIC_KEY)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "maintenance_mode".into()),
            Matcher::UrlEncoded("value".into(), "true".into()),
        ]))
        .with_body(json!({ "success": true }).to_string())
        .create_async()
        .await;

    let client = client(&server).login("key");

    let globals = client.admin_globals().await.unwrap();
    assert_eq!(globals.len(), 2);
    assert_eq!(globals[1].key, "max_upload_size");

    client
        .admin_set_global("maintenance_mode", "true")
        .await
        .unwrap();
    set.assert_async().await;
}

#[tokio::test]
async fn block_files() {
    let mut server = server().await;

    let mock = server
        .mock("POST", "/admin/block_files")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "text".into(),
                "https://pixeldrain.com/u/abc123 and /u/def456".into(),
            ),
            Matcher::UrlEncoded("type".into(), "copyright".into()),
            Matcher::UrlEncoded("reporter".into(), "Rights Org".into()),
        ]))
        .with_body(json!({ "files_blocked": ["abc123", "def456"] }).to_string())
        .create_async()
        .await;

    let blocked = client(&server)
        .login("key")
        .admin_block_files(
            "https://pixeldrain.com/u/abc123 and /u/def456",
            &AbuseType::Copyright.to_string(),
            "Rights Org",
        )
        .await
        .unwrap();

    assert_eq!(blocked.files_blocked, ["abc123", "def456"]);
    mock.assert_async().await;
}

#[test]
fn abuse_report_container() {
    let json = json!({
        "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "reports": [
            {
                "file_id": "16fd2706-8baf-433b-82eb-8c7fada847da",
                "ip_address": "192.0.2.1",
                "time": "2022-07-01T12:00:00Z",
                "status": "pending",
                "type": "copyright",
                "email": "legal@example.com"
            },
            {
                "file_id": "16fd2706-8baf-433b-82eb-8c7fada847da",
                "ip_address": "192.0.2.2",
                "time": "2022-07-01T13:00:00Z",
                "status": "escalated",
                "type": "spam"
            }
        ],
        "file": file_info("abc123"),
        "type": "copyright",
        "status": "granted",
        "first_report_time": "2022-07-01T12:00:00Z"
    });

    let container: AdminAbuseReportContainer = serde_json::from_value(json).unwrap();

    assert_eq!(container.typ, MaybeUnknown::Known(AbuseType::Copyright));
    assert_eq!(container.status, MaybeUnknown::Known(ReportStatus::Granted));
    assert_eq!(container.file.id, "abc123");
    assert_eq!(
        container.reports[1].status,
        MaybeUnknown::Unknown("escalated".into())
    );
    assert_eq!(
        container.reports[1].typ,
        MaybeUnknown::Unknown("spam".into())
    );
    assert!(container.reports[1].email.is_empty());
}

#[test]
fn ip_ban() {
    let json = json!({
        "address": "198.51.100.0/24",
        "offences": [{
            "ban_time": "2022-08-01T00:00:00Z",
            "expire_time": "0001-01-01T00:00:00Z",
            "reason": "malware",
            "reporter": "automated",
            "file_id": "16fd2706-8baf-433b-82eb-8c7fada847da",
            "file_public_id": "abc123",
            "file_name": "totally-legit.exe"
        }]
    });

    let ban: AdminIpBan = serde_json::from_value(json).unwrap();

    assert_eq!(ban.offences.len(), 1);
    assert_eq!(ban.offences[0].expire_time, None);
    assert_eq!(ban.offences[0].file_name, "totally-legit.exe");
}

mod common;

use mockito::Matcher;
use pixeldrain::Error;
use serde_json::json;

use common::{client, file_info, server};

#[tokio::test]
async fn list_with_files() {
    let mut server = server().await;

    let mut first = file_info("abc");
    first["description"] = json!("The beach");
    first["detail_href"] = json!("/file/abc/info");

    server
        .mock("GET", "/list/lst")
        .with_body(
            json!({
                "success": true,
                "id": "lst",
                "title": "Holiday",
                "date_created": "2021-07-01T10:00:00Z",
                "file_count": 2,
                "files": [first, file_info("def")],
                "can_edit": false
            })
            .to_string(),
        )
        .create_async()
        .await;

    let list = client(&server).list("lst").await.unwrap();

    assert_eq!(list.title, "Holiday");
    assert_eq!(list.file_count, 2);
    assert_eq!(list.files[0].description, "The beach");
    assert_eq!(list.files[0].info.id, "abc");
    assert_eq!(list.files[0].info.mime_type, "image/jpeg");
    assert!(list.files[1].description.is_empty());
    assert_eq!(list.files[1].info.id, "def");
}

#[tokio::test]
async fn dot_ids_never_leave_the_list_path() {
    let mut server = server().await;

    let elsewhere = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client(&server);

    for id in ["..", "."] {
        match client.list(id).await {
            Err(Error::DotSegment(segment)) => assert_eq!(segment, id),
            other => panic!("{other:?}"),
        }
    }

    elsewhere.assert_async().await;
}

#[tokio::test]
async fn dots_inside_an_id_are_kept() {
    let mut server = server().await;

    let mock = server
        .mock("GET", "/list/...")
        .with_body(
            json!({
                "id": "...",
                "title": "Dots",
                "date_created": "2021-07-01T10:00:00Z",
                "file_count": 0,
                "files": []
            })
            .to_string(),
        )
        .create_async()
        .await;

    let list = client(&server).list("...").await.unwrap();

    assert_eq!(list.id, "...");
    mock.assert_async().await;
}

mod common;

use mockito::Matcher;
use pixeldrain::{api::ErrorCode, Error};
use reqwest::StatusCode;
use serde_json::json;

use common::{client, server};

#[tokio::test]
async fn client_error_is_decoded() {
    let mut server = server().await;

    server
        .mock("GET", "/file/nope/info")
        .with_status(404)
        .with_body(
            json!({
                "success": false,
                "value": "not_found",
                "message": "The entity you requested could not be found"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client(&server).file_info("nope").await.unwrap_err();

    assert!(err.is_client_error());
    assert!(!err.is_server_error());
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

    let api = err.api_error().unwrap();
    assert_eq!(api.status, 404);
    assert_eq!(api.code(), Some(ErrorCode::NotFound));
    assert_eq!(api.message, "The entity you requested could not be found");
}

#[tokio::test]
async fn multiple_errors_are_kept() {
    let mut server = server().await;

    server
        .mock("POST", "/user/register")
        .match_body(Matcher::UrlEncoded("username".into(), "a".into()))
        .with_status(400)
        .with_body(
            json!({
                "success": false,
                "value": "multiple_errors",
                "message": "Multiple errors occurred",
                "errors": [
                    {
                        "success": false,
                        "value": "username_too_short",
                        "message": "Username is too short",
                        "extra": { "min_length": 3 }
                    },
                    {
                        "success": false,
                        "value": "password_too_short",
                        "message": "Password is too short"
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client(&server)
        .user_register("a", "", "b", "")
        .await
        .unwrap_err();

    let api = err.api_error().unwrap();
    assert_eq!(api.code(), Some(ErrorCode::MultipleErrors));
    assert_eq!(api.status, 400);

    let values: Vec<_> = api.errors.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, ["username_too_short", "password_too_short"]);
    assert_eq!(
        api.errors[0].extra.as_ref().unwrap()["min_length"],
        json!(3)
    );
}

#[tokio::test]
async fn server_error_without_json_body() {
    let mut server = server().await;

    server
        .mock("GET", "/user")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client(&server).user().await.unwrap_err();

    assert!(err.is_server_error());
    match err {
        Error::UnexpectedResponse { status, body } => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(body, "<html>Bad Gateway</html>");
        }
        other => panic!("expected unexpected response, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_with_json_body() {
    let mut server = server().await;

    server
        .mock("GET", "/admin/globals")
        .with_status(500)
        .with_body(json!({ "success": false, "value": "internal" }).to_string())
        .create_async()
        .await;

    let err = client(&server).admin_globals().await.unwrap_err();

    assert!(err.is_server_error());
    assert_eq!(err.api_error().unwrap().code(), Some(ErrorCode::Internal));
}

#[tokio::test]
async fn malformed_success_body() {
    let mut server = server().await;

    server
        .mock("GET", "/misc/recaptcha")
        .with_body("{\"site_key\":")
        .create_async()
        .await;

    let err = client(&server).recaptcha().await.unwrap_err();

    assert!(matches!(err, Error::JsonError(_)), "{err:?}");
    assert!(err.status().is_none());
}

#[tokio::test]
async fn empty_responses_only_check_the_status() {
    let mut server = server().await;

    server
        .mock("POST", "/coupon/SPRING/redeem")
        .with_status(403)
        .with_body(json!({ "success": false, "value": "unauthorized" }).to_string())
        .create_async()
        .await;

    let err = client(&server).redeem_coupon("SPRING").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(
        err.api_error().unwrap().code(),
        Some(ErrorCode::Unauthorized)
    );
}

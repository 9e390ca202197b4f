#![allow(dead_code)]

use mockito::{Server, ServerGuard};
use pixeldrain::Client;
use serde_json::{json, Value};

/// `Authorization` header for the key `key` with an empty username.
pub const BASIC_KEY: &str = "Basic OmtleQ==";

pub async fn server() -> ServerGuard {
    Server::new_async().await
}

pub fn client(server: &ServerGuard) -> Client {
    Client::new(server.url()).unwrap()
}

pub fn subscription_type() -> Value {
    json!({
        "id": "patreon_1",
        "name": "Pro",
        "type": "patreon",
        "file_size_limit": 20_000_000_000_i64,
        "file_expiry_days": 0,
        "storage_space": 0,
        "price_per_tb_storage": 0,
        "price_per_tb_bandwidth": 0,
        "monthly_transfer_cap": 0,
        "file_viewer_branding": true,
        "filesystem_access": false,
        "filesystem_storage_limit": 0
    })
}

pub fn file_info(id: &str) -> Value {
    json!({
        "id": id,
        "name": "cat.jpg",
        "size": 1234,
        "views": 5,
        "bandwidth_used": 6170,
        "bandwidth_used_paid": 0,
        "downloads": 5,
        "date_upload": "2022-03-01T12:00:00Z",
        "date_last_view": "0001-01-01T00:00:00Z",
        "mime_type": "image/jpeg",
        "thumbnail_href": format!("/file/{id}/thumbnail"),
        "hash_sha256": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        "delete_after_date": "0001-01-01T00:00:00Z",
        "delete_after_downloads": 0,
        "availability": "",
        "availability_message": "",
        "abuse_type": "",
        "abuse_reporter_name": "",
        "can_edit": false,
        "can_download": true,
        "show_ads": true,
        "allow_video_player": true,
        "download_speed_limit": 0
    })
}

mod common;

use serde_json::json;
use time::macros::datetime;
use uuid::Uuid;

use common::{client, server, subscription_type, BASIC_KEY};

#[tokio::test]
async fn unused_subscription() {
    let mut server = server().await;

    server
        .mock("GET", "/subscription/0b7a3e62-8a4f-4c0e-b0f4-3b0c3e7d2a11")
        .with_body(
            json!({
                "id": "0b7a3e62-8a4f-4c0e-b0f4-3b0c3e7d2a11",
                "used": false,
                "duration_days": 30,
                "start_date": "0001-01-01T00:00:00Z",
                "warning_date": "0001-01-01T00:00:00Z",
                "end_date": "0001-01-01T00:00:00Z",
                "subscription_type": subscription_type()
            })
            .to_string(),
        )
        .create_async()
        .await;

    let sub = client(&server)
        .subscription("0b7a3e62-8a4f-4c0e-b0f4-3b0c3e7d2a11")
        .await
        .unwrap();

    assert_eq!(
        sub.id,
        Uuid::parse_str("0b7a3e62-8a4f-4c0e-b0f4-3b0c3e7d2a11").unwrap()
    );
    assert!(!sub.used);
    assert_eq!(sub.start_time, None);
    assert_eq!(sub.end_date, None);
    assert_eq!(sub.subscription_type.id, "patreon_1");
}

#[tokio::test]
async fn link_subscription() {
    let mut server = server().await;

    let mock = server
        .mock("POST", "/subscription/some%2Fid/link")
        .match_header("authorization", BASIC_KEY)
        .with_body(json!({ "success": true }).to_string())
        .create_async()
        .await;

    client(&server)
        .login("key")
        .link_subscription("some/id")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn coupons() {
    let mut server = server().await;

    server
        .mock("GET", "/coupon/SPRING%2022")
        .with_body(json!({ "id": "SPRING 22", "credit": 5_000_000, "uses": 10 }).to_string())
        .create_async()
        .await;

    let redeem = server
        .mock("POST", "/coupon/SPRING%2022/redeem")
        .match_header("authorization", BASIC_KEY)
        .with_body(json!({ "success": true }).to_string())
        .create_async()
        .await;

    let client = client(&server).login("key");

    let coupon = client.coupon("SPRING 22").await.unwrap();
    assert_eq!(coupon.credit, 5_000_000);
    assert_eq!(coupon.uses, 10);

    client.redeem_coupon("SPRING 22").await.unwrap();
    redeem.assert_async().await;
}

#[tokio::test]
async fn invoices() {
    let mut server = server().await;

    server
        .mock("GET", "/btcpay/invoice")
        .with_body(
            json!([{
                "id": "inv_1",
                "time": "2022-04-05T06:07:08Z",
                "amount": 10_000_000,
                "vat": 2_100_000,
                "country": "NL",
                "payment_gateway": "btcpay",
                "payment_method": "BTC",
                "status": "Settled",
                "processing_fee": 0
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let invoices = client(&server).login("key").btcpay_invoices().await.unwrap();

    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].time, datetime!(2022-04-05 06:07:08 UTC));
    assert_eq!(invoices[0].vat, 2_100_000);
}

#[tokio::test]
async fn patreon() {
    let mut server = server().await;

    server
        .mock("GET", "/patreon/1234")
        .with_body(
            json!({
                "patreon_user_id": "1234",
                "full_name": "Alex",
                "last_charge_date": "2022-05-01T00:00:00Z",
                "last_charge_status": "Paid",
                "lifetime_support_cents": 2400,
                "patron_status": "active_patron",
                "pledge_amount_cents": 400,
                "pledge_relationship_start": "2021-11-01T00:00:00Z",
                "user_email": "alex@example.com",
                "subscription": subscription_type()
            })
            .to_string(),
        )
        .create_async()
        .await;

    let link = server
        .mock("POST", "/patreon/1234/link_subscription")
        .match_header("authorization", BASIC_KEY)
        .with_body(json!({ "success": true }).to_string())
        .create_async()
        .await;

    let client = client(&server).login("key");

    let patron = client.patron("1234").await.unwrap();
    assert_eq!(patron.pledge_amount_cents, 400);
    assert_eq!(
        patron.last_charge_date,
        Some(datetime!(2022-05-01 00:00:00 UTC))
    );
    assert_eq!(patron.subscription.name, "Pro");

    client.link_patreon("1234").await.unwrap();
    link.assert_async().await;
}

//! Subscriptions, coupons and invoices.
use reqwest::Method;
use serde::Deserialize;
use serde_with::serde_as;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{path::PathArg, serde::OptDateTime, Client};

/// A subscription: when it started, when it ends, and what type of
/// subscription it is.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subscription {
    /// Subscription id.
    pub id: Uuid,
    /// Whether the subscription has been linked to an account.
    pub used: bool,
    /// Length of the subscription.
    pub duration_days: u32,
    /// Start date. `None` until the subscription is used.
    #[serde(rename = "start_date", default)]
    #[serde_as(as = "OptDateTime")]
    pub start_time: Option<OffsetDateTime>,
    /// When the user gets warned about the imminent end.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub warning_date: Option<OffsetDateTime>,
    /// End date.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub end_date: Option<OffsetDateTime>,
    /// What kind of subscription this is.
    pub subscription_type: SubscriptionType,
}

/// Properties of a kind of subscription, like the perks and the cost. Not
/// an active subscription itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(clippy::struct_excessive_bools, clippy::module_name_repetitions)]
pub struct SubscriptionType {
    /// Identifier, like `patreon_1`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Billing kind, like `patreon` or `prepaid`.
    #[serde(rename = "type")]
    pub typ: String,
    /// Largest file that can be uploaded, in bytes.
    pub file_size_limit: i64,
    /// Days of inactivity after which files expire. Zero for never.
    pub file_expiry_days: i64,
    /// Storage space in bytes.
    pub storage_space: i64,
    /// Micro euros per terabyte of storage.
    pub price_per_tb_storage: i64,
    /// Micro euros per terabyte of bandwidth.
    pub price_per_tb_bandwidth: i64,
    /// Bytes of transfer per month.
    pub monthly_transfer_cap: i64,
    /// Custom branding on the file viewer.
    pub file_viewer_branding: bool,
    /// Access to the filesystem.
    pub filesystem_access: bool,
    /// Filesystem storage in bytes.
    pub filesystem_storage_limit: i64,
}

/// A coupon code which adds credit to an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CouponCode {
    /// The code.
    pub id: String,
    /// Micro euros credited on redemption.
    pub credit: i64,
    /// Redemptions left.
    pub uses: i64,
}

/// An invoice for a deposit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Invoice {
    /// Invoice id.
    pub id: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    /// Amount in micro euros, excluding VAT.
    pub amount: i64,
    /// VAT in micro euros.
    pub vat: i64,
    /// Country code used to calculate VAT.
    pub country: String,
    /// Like `btcpay` or `mollie`.
    pub payment_gateway: String,
    /// Payment method within the gateway.
    pub payment_method: String,
    /// Status, like `New` or `Settled`.
    pub status: String,
    /// Fee in micro euros.
    pub processing_fee: i64,
}

impl Client {
    /// Get a subscription by id.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - no such subscription
    pub async fn subscription(&self, id: &str) -> crate::Result<Subscription> {
        self.json(Method::GET, &format!("subscription/{}", PathArg(id)))
            .await
    }

    /// Link a subscription to the account this client is logged in as. This
    /// cannot be undone.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    /// - subscription already used
    pub async fn link_subscription(&self, id: &str) -> crate::Result<()> {
        self.empty(Method::POST, &format!("subscription/{}/link", PathArg(id)))
            .await
    }

    /// Get a coupon by its code.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - no such coupon
    pub async fn coupon(&self, id: &str) -> crate::Result<CouponCode> {
        self.json(Method::GET, &format!("coupon/{}", PathArg(id)))
            .await
    }

    /// Redeem a coupon on the account this client is logged in as.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    /// - coupon used up
    pub async fn redeem_coupon(&self, id: &str) -> crate::Result<()> {
        self.empty(Method::POST, &format!("coupon/{}/redeem", PathArg(id)))
            .await
    }

    /// List the BTCPay invoices of the logged in user.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    pub async fn btcpay_invoices(&self) -> crate::Result<Vec<Invoice>> {
        self.json(Method::GET, "btcpay/invoice").await
    }
}

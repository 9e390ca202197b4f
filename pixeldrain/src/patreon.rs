//! Patreon backers.
use reqwest::Method;
use serde::Deserialize;
use serde_with::serde_as;
use time::OffsetDateTime;

use crate::{path::PathArg, serde::OptDateTime, subscription::SubscriptionType, Client};

/// A backer on the pixeldrain patreon campaign.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Patron {
    /// Patreon's id of the user.
    pub patreon_user_id: String,
    /// Name on patreon.
    pub full_name: String,
    /// Last time the patron was charged.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub last_charge_date: Option<OffsetDateTime>,
    /// Outcome of the last charge, like `Paid` or `Declined`.
    pub last_charge_status: String,
    /// Total support in cents.
    pub lifetime_support_cents: i64,
    /// Like `active_patron` or `former_patron`.
    pub patron_status: String,
    /// Monthly pledge in cents.
    pub pledge_amount_cents: i64,
    /// Start of the pledge.
    #[serde(default)]
    #[serde_as(as = "OptDateTime")]
    pub pledge_relationship_start: Option<OffsetDateTime>,
    /// E-mail address on patreon.
    pub user_email: String,
    /// Subscription type the pledge entitles to.
    pub subscription: SubscriptionType,
}

impl Client {
    /// Get a patron by id.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - no such patron
    pub async fn patron(&self, id: &str) -> crate::Result<Patron> {
        self.json(Method::GET, &format!("patreon/{}", PathArg(id)))
            .await
    }

    /// Link a patreon pledge to the account this client is logged in as.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not logged in
    /// - pledge already linked
    pub async fn link_patreon(&self, id: &str) -> crate::Result<()> {
        self.empty(
            Method::POST,
            &format!("patreon/{}/link_subscription", PathArg(id)),
        )
        .await
    }
}

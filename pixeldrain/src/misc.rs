//! Odds and ends.
use reqwest::Method;
use serde::Deserialize;

use crate::Client;

/// The reCAPTCHA site key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recaptcha {
    /// Empty if reCAPTCHA is disabled on the server.
    pub site_key: String,
}

/// Price of one siacoin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SiaPrice {
    /// Price in euros.
    pub price: f64,
}

impl Client {
    /// Get the reCAPTCHA site key. If reCAPTCHA is disabled the key will be
    /// empty.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - pixeldrain errors
    pub async fn recaptcha(&self) -> crate::Result<Recaptcha> {
        self.json(Method::GET, "misc/recaptcha").await
    }

    /// Request a view token. A view token is valid for a limited amount of
    /// time and can be used to add views to a file with
    /// [`Client::add_file_view`]. View tokens can only be requested from
    /// localhost.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - not requested from localhost
    pub async fn view_token(&self) -> crate::Result<String> {
        self.json(Method::GET, "misc/viewtoken").await
    }

    /// Get the price of one siacoin.
    ///
    /// # Errors
    ///
    /// - network errors
    /// - pixeldrain errors
    pub async fn sia_price(&self) -> crate::Result<f64> {
        let price: SiaPrice = self.json(Method::GET, "misc/sia_price").await?;

        Ok(price.price)
    }
}

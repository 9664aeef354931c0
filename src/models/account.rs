use serde::Serialize;

use super::AccountValidator;
use crate::Result;

/// A FundLink user account.
///
/// Serializes with the field names the built-in registration body template
/// expects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Account {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub address_line1: String,
    pub address_line2: String,
    pub county: String,
    pub town_or_city: String,
    pub postcode: String,
    pub country: String,
}

impl Account {
    /// Check the country against the platform's published countries list.
    pub async fn has_valid_country<V>(&self, validator: &V) -> Result<bool>
    where
        V: AccountValidator + Sync,
    {
        validator.is_valid_country(&self.country).await
    }
}

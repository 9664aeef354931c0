use serde::Serialize;

use super::{Image, PageValidator};
use crate::Result;

/// A fundraising page to be registered against a pre-defined platform event.
///
/// Serializes with the field names the built-in registration body template
/// expects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FundraisingPageForEvent {
    pub charity_id: u32,
    pub event_id: u32,
    pub page_short_name: String,
    pub page_title: String,
    pub page_story: String,
    pub images: Vec<Image>,
    pub custom_codes: [String; 6],
    /// Target amount for this fundraising effort expressed as a valid
    /// currency amount, e.g. "999.99" or "9999".
    pub target_amount: String,
    pub currency_code: String,
    pub charity_funded: bool,
    pub platform_opt_in: bool,
    pub charity_opt_in: bool,
    /// Zero means no team; a non-zero id attaches the page to that team.
    pub team_id: u32,
}

impl FundraisingPageForEvent {
    /// Check the currency code against the platform's published list.
    pub async fn has_valid_currency_code<V>(&self, validator: &V) -> Result<bool>
    where
        V: PageValidator + Sync,
    {
        validator.is_valid_currency_code(&self.currency_code).await
    }

    /// Basic local validation on the target amount.
    pub fn has_valid_target_amount(&self) -> bool {
        self.target_amount.is_empty() || self.target_amount.parse::<f64>().is_ok()
    }
}

/// A validated reference to an existing fundraising page.
///
/// Only produced by service lookups, so holding one implies the page was
/// present at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundraisingPageRef {
    charity_id: u32,
    event_id: u32,
    id: u32,
    short_name: String,
}

impl FundraisingPageRef {
    pub(crate) fn new(charity_id: u32, event_id: u32, id: u32, short_name: String) -> Self {
        Self {
            charity_id,
            event_id,
            id,
            short_name,
        }
    }

    pub fn charity_id(&self) -> u32 {
        self.charity_id
    }

    pub fn event_id(&self) -> u32 {
        self.event_id
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_amount_validation() {
        let mut page = FundraisingPageForEvent::default();
        assert!(page.has_valid_target_amount());
        page.target_amount = "999.99".to_string();
        assert!(page.has_valid_target_amount());
        page.target_amount = "9999".to_string();
        assert!(page.has_valid_target_amount());
        page.target_amount = "a lot".to_string();
        assert!(!page.has_valid_target_amount());
    }
}

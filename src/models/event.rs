use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::Result;

/// A platform fundraising event.
///
/// Dates are kept in the platform's raw `/Date(...)/` form; use the
/// `parse_*_date` helpers to convert them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "completionDate")]
    pub completion_date: String,
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub location: String,
}

impl Event {
    pub fn parse_completion_date(&self) -> Result<DateTime<Utc>> {
        super::parse_date(&self.completion_date)
    }

    pub fn parse_expiry_date(&self) -> Result<DateTime<Utc>> {
        super::parse_date(&self.expiry_date)
    }

    pub fn parse_start_date(&self) -> Result<DateTime<Utc>> {
        super::parse_date(&self.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_platform_field_names() {
        let event: Event = serde_json::from_str(
            r#"{
                "id": 12,
                "name": "Spring Run",
                "description": "10k",
                "completionDate": "/Date(1474675200000+0000)/",
                "expiryDate": "/Date(1474761600000+0000)/",
                "startDate": "/Date(1474588800000+0000)/",
                "eventType": "Running",
                "location": "London"
            }"#,
        )
        .unwrap();
        assert_eq!(event.event_type, "Running");
        assert!(event.parse_start_date().unwrap() < event.parse_completion_date().unwrap());
    }
}

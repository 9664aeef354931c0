//! Value objects for FundLink platform entities.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::{Error, Result};

mod account;
mod event;
mod image;
mod page;
mod results;

pub use account::Account;
pub use event::Event;
pub use image::Image;
pub use page::{FundraisingPageForEvent, FundraisingPageRef};
pub use results::FundraisingResults;

/// Validation requiring a countries lookup against the platform.
///
/// Implemented by [`Client`](crate::Client); kept as a trait so model-level
/// checks stay testable without a live service.
pub trait AccountValidator {
    fn is_valid_country(&self, name: &str) -> impl Future<Output = Result<bool>> + Send;
}

/// Validation requiring a currency-code lookup against the platform.
pub trait PageValidator {
    fn is_valid_currency_code(&self, code: &str) -> impl Future<Output = Result<bool>> + Send;
}

/// Convert the date string returned by the platform to a UTC timestamp.
///
/// The raw value arrives in the form `/Date(1474675200000+0000)/`: a
/// millisecond epoch wrapped in a `/Date(...)/` envelope with a zone suffix.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    if raw.is_empty() {
        return Err(Error::InvalidDate {
            raw: raw.to_string(),
            reason: "no value set".to_string(),
        });
    }
    let stripped = raw.replace("/Date(", "");
    let plus = match stripped.find('+') {
        Some(i) if i >= 4 => i,
        _ => {
            return Err(Error::InvalidDate {
                raw: raw.to_string(),
                reason: "unrecognised format".to_string(),
            })
        }
    };
    let millis: i64 = stripped[..plus].parse().map_err(|_| Error::InvalidDate {
        raw: raw.to_string(),
        reason: "not a millisecond timestamp".to_string(),
    })?;
    if millis < 1000 {
        return Err(Error::InvalidDate {
            raw: raw.to_string(),
            reason: "timestamp too small".to_string(),
        });
    }
    DateTime::from_timestamp(millis / 1000, 0).ok_or_else(|| Error::InvalidDate {
        raw: raw.to_string(),
        reason: "timestamp out of range".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_platform_date_envelope() {
        let parsed = parse_date("/Date(1474675200000+0000)/").unwrap();
        assert_eq!(parsed.timestamp(), 1_474_675_200);
    }

    #[test]
    fn empty_date_is_rejected() {
        assert!(matches!(
            parse_date("").unwrap_err(),
            Error::InvalidDate { .. }
        ));
    }

    #[test]
    fn missing_zone_suffix_is_rejected() {
        assert!(parse_date("/Date(1474675200000)/").is_err());
    }

    #[test]
    fn non_numeric_timestamp_is_rejected() {
        assert!(parse_date("/Date(abcdef+0000)/").is_err());
    }

    #[test]
    fn tiny_timestamp_is_rejected() {
        assert!(parse_date("/Date(999+0000)/").is_err());
    }
}

use serde::Deserialize;

/// Current fundraising results for a page, as reported by the platform.
///
/// Money fields are kept as the decimal strings the platform returns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FundraisingResults {
    #[serde(rename = "fundraisingTarget")]
    pub target: String,
    #[serde(rename = "totalRaisedPercentageOfFundraisingTarget")]
    pub total_raised_percentage_of_target: String,
    #[serde(rename = "totalRaisedOffline")]
    pub total_raised_offline: String,
    #[serde(rename = "totalRaisedOnline")]
    pub total_raised_online: String,
    #[serde(rename = "totalRaisedSms")]
    pub total_raised_sms: String,
    #[serde(rename = "totalEstimatedGiftAid")]
    pub total_estimated_gift_aid: String,
    /// Set when the platform reports the page as cancelled (HTTP 410); no
    /// other fields are populated in that case.
    #[serde(skip)]
    pub cancelled: bool,
}

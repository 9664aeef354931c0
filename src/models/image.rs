use serde::Serialize;
use url::Url;

/// A fundraising page image.
#[derive(Debug, Clone, Serialize)]
pub struct Image {
    pub caption: String,
    pub url: Url,
}

//! Outbound request construction.

use reqwest::header::{HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request, Url};

use crate::{Error, Result};

/// Assemble an API request ready for transport.
///
/// Fails only when the method or the address is structurally invalid; no
/// semantic validation is applied beyond what URL parsing enforces. The
/// `User-Agent` and `Content-Type` headers are always set from the given
/// values. Pure construction, no side effects.
pub fn build_request(
    user_agent: &str,
    content_type: &str,
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<Request> {
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|e| Error::request_construction(format!("invalid method {method:?}: {e}")))?;
    let url = Url::parse(path)
        .map_err(|e| Error::request_construction(format!("invalid address {path:?}: {e}")))?;

    let mut request = Request::new(method, url);
    let headers = request.headers_mut();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|e| Error::request_construction(format!("invalid user agent: {e}")))?,
    );
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_str(content_type)
            .map_err(|e| Error::request_construction(format!("invalid content type: {e}")))?,
    );
    if let Some(body) = body {
        *request.body_mut() = Some(body.into());
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_standard_headers() {
        let req = build_request(
            "fundlink 0.2.1",
            "application/json",
            "PUT",
            "https://api.example.com/v1/account/",
            Some("{}".to_string()),
        )
        .unwrap();
        assert_eq!(req.method(), Method::PUT);
        assert_eq!(req.headers()[USER_AGENT], "fundlink 0.2.1");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert!(req.body().is_some());
    }

    #[test]
    fn body_is_optional() {
        let req = build_request(
            "ua",
            "application/json",
            "HEAD",
            "https://api.example.com/v1/countries",
            None,
        )
        .unwrap();
        assert!(req.body().is_none());
    }

    #[test]
    fn malformed_address_is_a_construction_error() {
        let err = build_request("ua", "application/json", "GET", "::not a url::", None)
            .unwrap_err();
        assert!(matches!(err, Error::RequestConstruction { .. }));
    }

    #[test]
    fn malformed_method_is_a_construction_error() {
        let err = build_request(
            "ua",
            "application/json",
            "GE T",
            "https://api.example.com",
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::RequestConstruction { .. }));
    }
}

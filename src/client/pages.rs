//! Fundraising page operations.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use url::Url;

use crate::api;
use crate::models::{FundraisingPageForEvent, FundraisingPageRef, FundraisingResults, PageValidator};
use crate::{Error, Result};

use super::{templates, Client, CONTENT_TYPE, OPERATION_HEADER, USER_AGENT};

const URL_CHECK_OPERATION: &str = "FundraisingApi:FundraisingPageUrlCheck";

const EVENT_PAGE_SIZE: u32 = 100;

#[derive(Deserialize)]
struct PageRecord {
    #[serde(rename = "charityId", default)]
    charity_id: u32,
    #[serde(rename = "eventId", default)]
    event_id: u32,
    #[serde(rename = "pageId", default)]
    page_id: u32,
    #[serde(rename = "pageShortName", default)]
    page_short_name: String,
}

impl Client {
    /// Check the availability of a fundraising page short name.
    ///
    /// When the name is taken, a list of available alternatives is fetched
    /// and returned alongside `false`.
    pub async fn fundraising_page_url_check(
        &self,
        page_short_name: &str,
    ) -> Result<(bool, Vec<String>)> {
        let path = self.path(&format!("/v1/fundraising/pages/{page_short_name}"));
        let (res, _) = self
            .dispatch("FundraisingPageURLCheck", "HEAD", &path, None)
            .await?;

        // As with account availability, a 404 is the success signal and must
        // come from the expected platform operation.
        let operation = res.header(OPERATION_HEADER).unwrap_or_default();
        if operation != URL_CHECK_OPERATION {
            return Err(Error::UnexpectedOperation {
                expected: URL_CHECK_OPERATION.to_string(),
                received: operation.to_string(),
            });
        }

        match res.status().as_u16() {
            404 => Ok((true, Vec::new())),
            200 => {
                let suggestions = self.page_name_suggestions(page_short_name).await?;
                Ok((false, suggestions))
            }
            status => Err(Error::invalid_response(status)),
        }
    }

    async fn page_name_suggestions(&self, preferred_name: &str) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct Suggestions {
            #[serde(default)]
            names: Vec<String>,
        }

        let encoded: String =
            url::form_urlencoded::byte_serialize(preferred_name.as_bytes()).collect();
        let path = self.path(&format!(
            "/v1/fundraising/pages/suggest?preferredName={encoded}"
        ));
        let (res, res_body) = self
            .dispatch("FundraisingPageURLCheck", "GET", &path, None)
            .await?;
        if res.status().as_u16() != 200 {
            return Err(Error::invalid_response(res.status().as_u16()));
        }
        let suggestions: Suggestions = serde_json::from_str(&res_body)?;
        Ok(suggestions.names)
    }

    /// Register a fundraising page for a pre-defined event.
    ///
    /// Requires the owning account's credentials. Returns the page URL and
    /// the sign-on URL published by the platform. On rejection the payload
    /// is re-validated (currency code, target amount) and the findings are
    /// folded into the error.
    pub async fn register_fundraising_page_for_event(
        &self,
        email: &str,
        password: &str,
        page: &FundraisingPageForEvent,
    ) -> Result<(Url, Url)> {
        #[derive(Deserialize)]
        struct Registered {
            #[serde(rename = "signOnUrl")]
            sign_on_url: String,
            next: Next,
        }
        #[derive(Deserialize)]
        struct Next {
            uri: String,
        }

        let body = self.templates.build(
            templates::REGISTER_FUNDRAISING_PAGE_FOR_EVENT,
            page,
            CONTENT_TYPE,
        )?;
        let path = self.path("/v1/fundraising/pages");
        let mut request =
            api::build_request(USER_AGENT, CONTENT_TYPE, "PUT", &path, Some(body.clone()))?;

        // This request requires authentication.
        let credentials = BASE64.encode(format!("{email}:{password}"));
        request.headers_mut().insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {credentials}"))
                .map_err(|e| Error::request_construction(format!("invalid credentials: {e}")))?,
        );

        let (res, res_body) = self
            .dispatch_request("RegisterFundraisingPageForEvent", request, &body)
            .await?;

        let status = res.status().as_u16();
        if status != 201 {
            let mut findings = String::new();
            match page.has_valid_currency_code(self).await {
                Err(err) => {
                    findings.push_str(&format!("errors running CurrencyCode validation {err}; "))
                }
                Ok(false) => findings.push_str("invalid CurrencyCode; "),
                Ok(true) => {}
            }
            if !page.has_valid_target_amount() {
                findings.push_str("invalid TargetAmount");
            }
            let findings = findings.trim_end().trim_end_matches(';').to_string();
            let findings = if findings.is_empty() {
                "no errors found".to_string()
            } else {
                findings
            };
            return Err(Error::invalid_response_with_detail(
                status,
                format!("result of running validation on request payload was: {findings}"),
            ));
        }

        let registered: Registered = serde_json::from_str(&res_body)?;
        let page_url = Url::parse(&registered.next.uri).map_err(|e| {
            Error::invalid_response_with_detail(status, format!("unparseable page url: {e}"))
        })?;
        let sign_on_url = Url::parse(&registered.sign_on_url).map_err(|e| {
            Error::invalid_response_with_detail(status, format!("unparseable sign-on url: {e}"))
        })?;
        Ok((page_url, sign_on_url))
    }

    /// Check a currency code against the platform's published list.
    pub async fn is_valid_currency_code(&self, code: &str) -> Result<bool> {
        #[derive(Deserialize)]
        struct Currency {
            #[serde(rename = "currencyCode")]
            currency_code: String,
        }

        let path = self.path("/v1/fundraising/currencies");
        let (res, res_body) = self
            .dispatch("IsValidCurrencyCode", "GET", &path, None)
            .await?;
        if res.status().as_u16() != 200 {
            return Err(Error::invalid_response(res.status().as_u16()));
        }
        let currencies: Vec<Currency> = serde_json::from_str(&res_body)?;
        Ok(currencies.iter().any(|c| c.currency_code == code))
    }

    /// Current fundraising results for the referenced page.
    ///
    /// A page the platform reports gone (410) comes back with the
    /// `cancelled` flag set rather than as an error.
    pub async fn fundraising_page_results(
        &self,
        page: &FundraisingPageRef,
    ) -> Result<FundraisingResults> {
        let path = self.path(&format!("/v1/fundraising/pages/{}", page.short_name()));
        let (res, res_body) = self
            .dispatch("FundraisingPageResults", "GET", &path, None)
            .await?;

        match res.status().as_u16() {
            410 => Ok(FundraisingResults {
                cancelled: true,
                ..FundraisingResults::default()
            }),
            200 => Ok(serde_json::from_str(&res_body)?),
            status => Err(Error::invalid_response(status)),
        }
    }

    /// The charity's fundraising pages registered with the given account.
    pub async fn fundraising_pages_for_charity_and_user(
        &self,
        charity_id: u32,
        email: &str,
    ) -> Result<Vec<FundraisingPageRef>> {
        let path = self.path(&format!("/v1/account/{email}/pages/?charityId={charity_id}"));
        let (res, res_body) = self
            .dispatch("FundraisingPagesForCharityAndUser", "GET", &path, None)
            .await?;
        if res.status().as_u16() != 200 {
            return Err(Error::invalid_response(res.status().as_u16()));
        }

        let records: Vec<PageRecord> = serde_json::from_str(&res_body)?;
        Ok(records
            .into_iter()
            .filter(|p| p.page_id > 0)
            .map(|p| FundraisingPageRef::new(charity_id, p.event_id, p.page_id, p.page_short_name))
            .collect())
    }

    /// All fundraising pages registered for the given event.
    ///
    /// Walks the paginated listing and verifies the aggregate count against
    /// the total the platform reports.
    pub async fn fundraising_pages_for_event(
        &self,
        event_id: u32,
    ) -> Result<Vec<FundraisingPageRef>> {
        let (mut results, mut total_pagination, mut total_reported) =
            self.paginated_pages_for_event(event_id, 0).await?;

        let mut page = 2;
        while page <= total_pagination {
            let (mut next, pagination, reported) =
                self.paginated_pages_for_event(event_id, page).await?;
            results.append(&mut next);
            total_pagination = pagination;
            total_reported = reported;
            page += 1;
        }

        if results.len() != total_reported as usize {
            return Err(Error::InconsistentRead {
                expected: total_reported as usize,
                actual: results.len(),
            });
        }
        Ok(results)
    }

    async fn paginated_pages_for_event(
        &self,
        event_id: u32,
        pagination: u32,
    ) -> Result<(Vec<FundraisingPageRef>, u32, u32)> {
        #[derive(Deserialize)]
        struct EventPages {
            #[serde(rename = "totalPages", default)]
            total_pages: u32,
            #[serde(rename = "totalFundraisingPages", default)]
            total_fundraising_pages: u32,
            #[serde(rename = "fundraisingPages", default)]
            fundraising_pages: Vec<PageRecord>,
        }

        let page = if pagination > 0 { pagination } else { 1 };
        let path = self.path(&format!(
            "/v1/event/{event_id}/pages/?pageSize={EVENT_PAGE_SIZE}&page={page}"
        ));
        let (res, res_body) = self
            .dispatch("FundraisingPagesForEvent", "GET", &path, None)
            .await?;
        if res.status().as_u16() != 200 {
            return Err(Error::invalid_response(res.status().as_u16()));
        }

        let listing: EventPages = serde_json::from_str(&res_body)?;
        let refs = listing
            .fundraising_pages
            .into_iter()
            .filter(|p| p.page_id > 0)
            .map(|p| FundraisingPageRef::new(p.charity_id, event_id, p.page_id, p.page_short_name))
            .collect();
        Ok((refs, listing.total_pages, listing.total_fundraising_pages))
    }
}

impl PageValidator for Client {
    async fn is_valid_currency_code(&self, code: &str) -> Result<bool> {
        Client::is_valid_currency_code(self, code).await
    }
}

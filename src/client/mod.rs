//! Higher-level wrapper around the FundLink platform API.
//!
//! [`Client`] owns the HTTP client, the API key, the resolved environment
//! base path and a per-instance [`TemplateCache`]; every operation builds its
//! request, dispatches it through the [`api`](crate::api) core and parses the
//! raw response into typed results. Failures on write operations are
//! augmented by running secondary validation calls against the rejected
//! payload.

mod account;
mod builder;
mod pages;
mod templates;

pub use builder::ClientBuilder;

use std::sync::Arc;

use reqwest::Request;

use crate::api::{self, CallLogger, ResponseParts, TemplateCache};
use crate::Result;

/// Identifies fundlink requests to the platform.
pub const USER_AGENT: &str = concat!("fundlink ", env!("CARGO_PKG_VERSION"));

/// Content type used in platform API requests and responses.
pub const CONTENT_TYPE: &str = api::JSON_CONTENT_TYPE;

/// Response header naming the platform operation that produced a response.
/// Checked wherever a 404 doubles as a success signal.
pub(crate) const OPERATION_HEADER: &str = "x-fundlink-operation";

const SANDBOX_BASE_PATH: &str = "https://api.sandbox.fundlink.example";
const LIVE_BASE_PATH: &str = "https://api.fundlink.example";

/// A FundLink platform environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Env {
    /// A locally hosted stand-in; requires a base URL override on the builder.
    Local,
    #[default]
    Sandbox,
    Live,
}

impl Env {
    fn base_path(self) -> &'static str {
        match self {
            Env::Local => "",
            Env::Sandbox => SANDBOX_BASE_PATH,
            Env::Live => LIVE_BASE_PATH,
        }
    }
}

/// Client for the FundLink platform API.
///
/// Create one with [`ClientBuilder`]. The client is cheap to share behind an
/// `Arc`; all operations take `&self`.
pub struct Client {
    pub(crate) api_key: String,
    pub(crate) base_path: String,
    pub(crate) http: reqwest::Client,
    pub(crate) origin: String,
    pub(crate) logger: Option<Arc<dyn CallLogger>>,
    pub(crate) templates: TemplateCache,
}

impl Client {
    /// Augment subsequent call logging with the specified origin tag.
    pub fn trace_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    /// The environment base path this client resolves against.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Full request path: base, API key, then the versioned suffix.
    pub(crate) fn path(&self, suffix: &str) -> String {
        format!("{}/{}{}", self.base_path, self.api_key, suffix)
    }

    /// Build and transport one request, collapsing the outcome for callers
    /// that treat any error as fatal to the operation.
    pub(crate) async fn dispatch(
        &self,
        callee_id: &str,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<(ResponseParts, String)> {
        let body_text = body.clone().unwrap_or_default();
        let request = api::build_request(USER_AGENT, CONTENT_TYPE, method, path, body)?;
        self.dispatch_request(callee_id, request, &body_text).await
    }

    /// Transport an already-assembled request (used when extra headers such
    /// as authentication have been applied).
    pub(crate) async fn dispatch_request(
        &self,
        callee_id: &str,
        request: Request,
        body_text: &str,
    ) -> Result<(ResponseParts, String)> {
        api::execute(
            &self.http,
            &self.origin,
            callee_id,
            request,
            body_text,
            self.logger.as_deref(),
        )
        .await
        .into_result()
    }
}

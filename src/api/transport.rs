//! Single-call transport.
//!
//! [`execute`] performs exactly one request/response round trip, measures
//! wall-clock duration through to the fully drained body, and emits exactly
//! one [`Call`] record to the injected logger on every path, success or
//! failure. Transport failures never panic; they are converted into the
//! outcome's error slot.

use std::time::Instant;

use reqwest::header::HeaderMap;
use reqwest::{Client, Request, StatusCode, Url, Version};

use super::log::{Call, CallLogger};
use crate::Error;

/// Snapshot of an HTTP response taken before the body is drained.
///
/// Draining consumes the underlying `reqwest::Response`, so this is the view
/// callers inspect after the round trip: status, headers and the final URL.
#[derive(Debug, Clone)]
pub struct ResponseParts {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    version: Version,
}

impl ResponseParts {
    fn capture(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
            version: response.version(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as a string, `None` if absent or not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

/// Result triple of one transported call.
///
/// Exactly one of the following shapes occurs:
/// - success: `response` set, `body` drained, `error` empty
/// - transport failure: `response` empty, `body` empty, `error` set
/// - body-read failure: `response` set, `body` empty, `error` set
#[derive(Debug)]
pub struct CallOutcome {
    pub response: Option<ResponseParts>,
    pub body: String,
    pub error: Option<Error>,
}

impl CallOutcome {
    /// Collapse the triple into a `Result` for callers that treat any error
    /// as fatal to the call.
    pub fn into_result(self) -> crate::Result<(ResponseParts, String)> {
        match (self.error, self.response) {
            (Some(err), _) => Err(err),
            (None, Some(parts)) => Ok((parts, self.body)),
            (None, None) => Err(Error::BatchUnit {
                reason: "call completed without a response or an error".to_string(),
            }),
        }
    }
}

/// Transport a single API request.
///
/// The request is treated as read-only input and consumed by the send. The
/// whole response body is drained into a string; this is an unbounded read,
/// sized for the payloads this API returns. The connection is released when
/// the response value goes out of scope, whether or not draining succeeds.
///
/// `logger` may be `None`, in which case logging is a no-op. Semantics are
/// identical whether invoked directly or as the unit of work inside
/// [`execute_batch`](crate::api::execute_batch).
pub async fn execute(
    client: &Client,
    origin_id: &str,
    callee_id: &str,
    request: Request,
    request_body: &str,
    logger: Option<&dyn CallLogger>,
) -> CallOutcome {
    let started = Instant::now();
    let req_repr = format!("{request:?}");

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(err) => {
            let error = Error::Transport(err);
            emit(
                logger,
                origin_id,
                callee_id,
                started,
                &req_repr,
                request_body,
                "",
                "",
                Some(&error),
            );
            return CallOutcome {
                response: None,
                body: String::new(),
                error: Some(error),
            };
        }
    };

    let parts = ResponseParts::capture(&response);
    let res_repr = format!("{response:?}");

    match response.text().await {
        Ok(body) => {
            emit(
                logger,
                origin_id,
                callee_id,
                started,
                &req_repr,
                request_body,
                &res_repr,
                &body,
                None,
            );
            CallOutcome {
                response: Some(parts),
                body,
                error: None,
            }
        }
        Err(err) => {
            let error = Error::BodyRead(err);
            emit(
                logger,
                origin_id,
                callee_id,
                started,
                &req_repr,
                request_body,
                &res_repr,
                "",
                Some(&error),
            );
            CallOutcome {
                response: Some(parts),
                body: String::new(),
                error: Some(error),
            }
        }
    }
}

// One emit per execute() invocation, on whichever exit path is taken.
#[allow(clippy::too_many_arguments)]
fn emit(
    logger: Option<&dyn CallLogger>,
    origin_id: &str,
    callee_id: &str,
    started: Instant,
    req: &str,
    req_body: &str,
    res: &str,
    res_body: &str,
    error: Option<&Error>,
) {
    let Some(logger) = logger else {
        return;
    };
    let time_taken = format!("{:.2}", started.elapsed().as_secs_f64() * 1000.0);
    logger.log(Call {
        origin_id: origin_id.to_string(),
        callee_id: callee_id.to_string(),
        time_taken,
        req: req.to_string(),
        req_body: req_body.to_string(),
        res: res.to_string(),
        res_body: res_body.to_string(),
        err: error.map(|e| e.to_string()).unwrap_or_default(),
    });
}

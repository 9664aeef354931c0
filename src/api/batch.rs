//! Concurrent batch dispatch.
//!
//! [`execute_batch`] fans an ordered set of independent requests out to one
//! task each, transports them all concurrently, and reassembles the results
//! in the exact input order regardless of completion order.

use std::sync::Arc;

use futures::future::join_all;
use reqwest::{Client, Request};

use super::log::CallLogger;
use super::transport::{self, ResponseParts};
use crate::Error;

/// Pairs a request with its original position so its result lands in the
/// right slot whatever order the units complete in. Never exposed.
struct BatchItem {
    sequence: usize,
    request: Request,
    request_body: String,
}

/// Results of a batch dispatch: three parallel sequences indexed identically
/// to the input request sequence.
///
/// Invariant: `responses`, `bodies` and `errors` all have the input length,
/// and slot `i` in each corresponds to input request `i`. A batch is a
/// concurrency construct, not an atomicity one: partial failure is normal,
/// and callers inspect each error slot independently.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub responses: Vec<Option<ResponseParts>>,
    pub bodies: Vec<String>,
    pub errors: Vec<Option<Error>>,
}

impl BatchResult {
    fn sized(n: usize) -> Self {
        Self {
            responses: (0..n).map(|_| None).collect(),
            bodies: vec![String::new(); n],
            errors: (0..n).map(|_| None).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// True when every error slot is empty.
    pub fn all_succeeded(&self) -> bool {
        self.errors.iter().all(|e| e.is_none())
    }
}

/// Transport a sequence of API requests concurrently.
///
/// Spawns exactly one task per request with no upper bound on fan-out. This
/// matches the intended use of small batches; for very large N the caller is
/// responsible for chunking, as no worker pool or concurrency limit is
/// applied here.
///
/// Each unit of work runs [`execute`](crate::api::execute) with unchanged semantics and
/// reports `(sequence, outcome)` through its single exit path, so the
/// dispatcher's await-all barrier is released exactly once per unit even when
/// a call fails. A panicked unit is converted into that slot's error rather
/// than aborting the batch. An individual failure never cancels or otherwise
/// affects sibling requests.
///
/// `request_bodies` carries the pre-rendered body text for logging and must
/// be index-aligned with `requests`; missing entries are treated as empty.
pub async fn execute_batch(
    client: &Client,
    origin_id: &str,
    callee_id: &str,
    requests: Vec<Request>,
    mut request_bodies: Vec<String>,
    logger: Option<Arc<dyn CallLogger>>,
) -> BatchResult {
    let n = requests.len();
    let mut result = BatchResult::sized(n);
    if n == 0 {
        return result;
    }

    request_bodies.resize(n, String::new());

    let items = requests
        .into_iter()
        .zip(request_bodies)
        .enumerate()
        .map(|(sequence, (request, request_body))| BatchItem {
            sequence,
            request,
            request_body,
        });

    let mut handles = Vec::with_capacity(n);
    for item in items {
        let client = client.clone();
        let origin_id = origin_id.to_string();
        let callee_id = callee_id.to_string();
        let logger = logger.clone();
        handles.push(tokio::spawn(async move {
            let outcome = transport::execute(
                &client,
                &origin_id,
                &callee_id,
                item.request,
                &item.request_body,
                logger.as_deref(),
            )
            .await;
            (item.sequence, outcome)
        }));
    }

    // Handles are in spawn order, so position i is sequence i even if the
    // task itself died before reporting.
    for (i, joined) in join_all(handles).await.into_iter().enumerate() {
        match joined {
            Ok((sequence, outcome)) => {
                result.responses[sequence] = outcome.response;
                result.bodies[sequence] = outcome.body;
                result.errors[sequence] = outcome.error;
            }
            Err(err) => {
                result.errors[i] = Some(Error::BatchUnit {
                    reason: err.to_string(),
                });
            }
        }
    }

    result
}

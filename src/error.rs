use thiserror::Error;

/// Unified error type for the fundlink client.
///
/// This aggregates request-construction, template, transport and
/// response-mapping failures into one crate-level error so callers can
/// propagate with `?` and match on the variant they care about.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error building request: {reason}")]
    RequestConstruction { reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error draining response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("template {name} not found")]
    TemplateNotFound { name: String },

    #[error("error initialising template {name}: {reason}")]
    TemplateCompile { name: String, reason: String },

    #[error("error executing template {name}: {reason}")]
    TemplateExecution { name: String, reason: String },

    /// The rendered template output failed structured-format compaction.
    /// Carries the raw rendered text so the broken payload can be inspected.
    #[error("malformed body generated from template {name}: {reason}, raw output: {raw}")]
    MalformedTemplateOutput {
        name: String,
        raw: String,
        reason: String,
    },

    #[error("invalid response {status}{}", .detail.as_ref().map(|d| format!(", {}", d)).unwrap_or_default())]
    InvalidResponse { status: u16, detail: Option<String> },

    #[error("unexpected operation header, expected {expected} but received {received}")]
    UnexpectedOperation { expected: String, received: String },

    #[error("inconsistent read, expected {expected} results but have {actual}")]
    InconsistentRead { expected: usize, actual: usize },

    #[error("invalid platform date {raw:?}: {reason}")]
    InvalidDate { raw: String, reason: String },

    #[error("error decoding response: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A batch unit of work stopped before producing a result (e.g. the task
    /// panicked). Recorded in that unit's slot; sibling units are unaffected.
    #[error("batch unit of work failed to complete: {reason}")]
    BatchUnit { reason: String },
}

impl Error {
    pub fn request_construction(reason: impl Into<String>) -> Self {
        Error::RequestConstruction {
            reason: reason.into(),
        }
    }

    /// Invalid response with just a status line.
    pub fn invalid_response(status: u16) -> Self {
        Error::InvalidResponse {
            status,
            detail: None,
        }
    }

    /// Invalid response augmented with extra findings (e.g. the result of
    /// running secondary validation on the rejected payload).
    pub fn invalid_response_with_detail(status: u16, detail: impl Into<String>) -> Self {
        Error::InvalidResponse {
            status,
            detail: Some(detail.into()),
        }
    }
}

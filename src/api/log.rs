//! Call metadata logging.
//!
//! Every transported request produces exactly one [`Call`] record which is
//! handed to an injected [`CallLogger`]. Logging is best-effort: an
//! implementation must absorb its own write failures rather than surface them
//! into the call path, and it must be safe to invoke from multiple in-flight
//! requests at once.

use std::io::Write;
use std::sync::Mutex;

/// Metadata describing one request/response round trip.
///
/// All fields are textual; `time_taken` is elapsed wall-clock milliseconds
/// formatted with two decimal places. Created once per transported request
/// and consumed synchronously by the logger.
#[derive(Debug, Clone, Default)]
pub struct Call {
    /// Caller-supplied origin tag (e.g. the application making the call).
    pub origin_id: String,
    /// The operation being invoked (e.g. `Validate`).
    pub callee_id: String,
    /// Elapsed milliseconds, two decimal places.
    pub time_taken: String,
    /// Textual representation of the outgoing request.
    pub req: String,
    /// Outgoing request body.
    pub req_body: String,
    /// Textual representation of the incoming response, empty if none arrived.
    pub res: String,
    /// Incoming response body.
    pub res_body: String,
    /// Error description, empty if the call succeeded.
    pub err: String,
}

/// Capability for consuming [`Call`] records.
///
/// Implementations must be `Send + Sync`: the batch dispatcher invokes the
/// same logger concurrently from every in-flight unit of work, and records
/// from different calls may interleave.
pub trait CallLogger: Send + Sync {
    fn log(&self, call: Call);
}

/// Any thread-safe closure over a [`Call`] is a logger.
impl<F> CallLogger for F
where
    F: Fn(Call) + Send + Sync,
{
    fn log(&self, call: Call) {
        self(call)
    }
}

/// Line-oriented console-style logger writing to the provided writer.
///
/// The writer is mutex-guarded so concurrent batch units produce whole lines.
pub struct ConsoleLogger<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> ConsoleLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> CallLogger for ConsoleLogger<W> {
    fn log(&self, call: Call) {
        if let Ok(mut w) = self.writer.lock() {
            let _ = writeln!(
                w,
                "API_CALL\tOriginID: {}\tDuration: {} ms\tMethod: {}\tRequest: {}\tRequestBody: {}\tResponse: {}\tResponseBody: {}\tError: {}",
                call.origin_id,
                call.time_taken,
                call.callee_id,
                call.req,
                call.req_body,
                call.res,
                call.res_body,
                call.err,
            );
        }
    }
}

/// Structured key-value logger emitting through the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl CallLogger for TracingLogger {
    fn log(&self, call: Call) {
        tracing::info!(
            origin_id = %call.origin_id,
            method = %call.callee_id,
            duration_ms = %call.time_taken,
            request = %call.req,
            request_body = %call.req_body,
            response = %call.res,
            response_body = %call.res_body,
            error = %call.err,
            "calling api"
        );
    }
}

//! Request/transport layer.
//!
//! This module is the protocol-level core the domain client is built on:
//! it assembles outbound requests, renders their bodies from named
//! templates, transports calls singly or as a concurrent batch, and hands a
//! structured [`Call`] record to an injected logger for every round trip.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`TemplateCache`] | Named, precompiled request-body templates |
//! | [`build_request`] | Assembles one ready-to-send request |
//! | [`execute`] | Transports one request and logs the call |
//! | [`execute_batch`] | Fans N requests out concurrently, order-preserving |
//! | [`CallLogger`] | Capability consuming per-call metadata |
//!
//! The layer carries no domain knowledge: endpoint paths, bodies and
//! response parsing all live with the caller.

mod batch;
mod log;
mod request;
mod templates;
mod transport;

pub use batch::{execute_batch, BatchResult};
pub use log::{Call, CallLogger, ConsoleLogger, TracingLogger};
pub use request::build_request;
pub use templates::{TemplateCache, JSON_CONTENT_TYPE};
pub use transport::{execute, CallOutcome, ResponseParts};

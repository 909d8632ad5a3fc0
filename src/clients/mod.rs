//! HTTP transport for the carrier gateway.
//!
//! This module provides the transport layer every operation posts through.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request document addressed to the gateway
//! - [`HttpResponse`]: the raw gateway response
//! - [`DataType`]: content types for request documents
//!
//! # Retry Behavior
//!
//! There is none. The gateway is posted to exactly once per operation and
//! any failure is returned to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

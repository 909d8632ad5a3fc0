//! Operation error types.
//!
//! Every facade operation returns [`ShipmentError`]. Carrier-reported
//! failures become a [`CarrierError`] tagged with the [`OperationFamily`]
//! that produced it and the [`FailureCause`] the reply indicated.
//!
//! # Example
//!
//! ```rust,ignore
//! use fedex_api::{FailureCause, ShipmentError};
//!
//! match shipment.rate(&request).await {
//!     Ok(details) => println!("{details}"),
//!     Err(ShipmentError::Config(e)) => eprintln!("nothing sent: {e}"),
//!     Err(ShipmentError::Carrier(e)) if e.cause == FailureCause::Validation => {
//!         eprintln!("FedEx rejected the request: {}", e.message);
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::xml::XmlError;

/// The carrier service family an operation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationFamily {
    Rate,
    /// Label creation and shipment deletion.
    Label,
    Track,
    /// Pickup creation, cancellation and availability.
    Pickup,
    AddressValidation,
    DocumentUpload,
}

impl fmt::Display for OperationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rate => "rate",
            Self::Label => "label",
            Self::Track => "track",
            Self::Pickup => "pickup",
            Self::AddressValidation => "address validation",
            Self::DocumentUpload => "document upload",
        };
        f.write_str(name)
    }
}

/// Why the carrier did not accept a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureCause {
    /// The reply had severity `ERROR`: a field was present but the carrier
    /// rejected its value.
    Validation,
    /// The reply had severity `FAILURE`, an unknown severity, or none.
    Failure,
    /// The gateway answered with a SOAP fault instead of a reply.
    TransportFault,
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation error",
            Self::Failure => "failure",
            Self::TransportFault => "transport fault",
        };
        f.write_str(name)
    }
}

/// A failure reported by the carrier. `message` is the carrier's own text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("FedEx {family} {cause}: {message}")]
pub struct CarrierError {
    pub family: OperationFamily,
    pub cause: FailureCause,
    pub message: String,
}

impl CarrierError {
    /// Creates a carrier error.
    #[must_use]
    pub fn new(family: OperationFamily, cause: FailureCause, message: impl Into<String>) -> Self {
        Self {
            family,
            cause,
            message: message.into(),
        }
    }
}

/// Unified error type returned by every operation.
#[derive(Debug, Error)]
pub enum ShipmentError {
    /// Credentials or request fields were incomplete. Nothing was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The carrier reported a failure.
    #[error(transparent)]
    Carrier(#[from] CarrierError),

    /// The response could not be parsed into the expected shape.
    #[error(transparent)]
    Parse(#[from] XmlError),

    /// The request could not be sent or failed on the wire.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ShipmentError {
    /// Returns the carrier error, if this is one.
    #[must_use]
    pub const fn as_carrier(&self) -> Option<&CarrierError> {
        match self {
            Self::Carrier(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::clients::InvalidHttpRequestError> for ShipmentError {
    fn from(error: crate::clients::InvalidHttpRequestError) -> Self {
        Self::Http(error.into())
    }
}

//! Carrier operations.
//!
//! Each operation implements [`Operation`]: it names its fixed facts
//! (root element, namespace, version, reply key, error family), writes
//! its request body after the shared envelope, and extracts its payload
//! from a successful reply. [`process`] runs the common cycle:
//!
//! 1. local validation (fails with [`ConfigError`] before anything is built)
//! 2. envelope plus body written into one document
//! 3. a single POST to the credential-selected gateway
//! 4. response parsed into a [`NormalizedResponse`] and classified
//! 5. payload extracted, or the carrier failure returned

mod address_validation;
mod cancel_pickup;
mod classify;
mod delete_shipment;
mod document_upload;
mod envelope;
mod errors;
mod fragments;
mod label;
mod pickup;
mod pickup_availability;
mod rate;
mod shipment_request;
mod track;

pub use address_validation::{
    AddressValidationRequest, AddressValidationRequestBuilder, AddressValidationVersion,
};
pub use cancel_pickup::{CancelPickupRequest, CancelPickupRequestBuilder};
pub use classify::{is_success, SUCCESS_SEVERITIES};
pub use delete_shipment::{DeleteShipmentRequest, DeleteShipmentRequestBuilder};
pub use document_upload::{DocumentUpload, DocumentUploadBuilder};
pub use envelope::OperationSpec;
pub use errors::{CarrierError, FailureCause, OperationFamily, ShipmentError};
pub use fragments::{resolve_service_type, HOME_DELIVERY_WEIGHT_LIMIT, MAX_STREET_LINES};
pub use pickup::{PickupRequest, PickupRequestBuilder};
pub use pickup_availability::{PickupAvailabilityRequest, PickupAvailabilityRequestBuilder};
pub use shipment_request::{ShipmentRequest, ShipmentRequestBuilder};
pub use track::{TrackRequest, TrackRequestBuilder};

pub(crate) use address_validation::AddressValidation;
pub(crate) use cancel_pickup::CancelPickup;
pub(crate) use delete_shipment::DeleteShipment;
pub(crate) use document_upload::UploadDocuments;
pub(crate) use label::Label;
pub(crate) use pickup::Pickup;
pub(crate) use pickup_availability::PickupAvailability;
pub(crate) use rate::Rate;
pub(crate) use track::Track;

use serde_json::Value;

use crate::clients::{HttpClient, HttpRequest};
use crate::config::Credentials;
use crate::error::ConfigError;
use crate::request::envelope::{add_envelope, Localization};
use crate::xml::{NormalizedResponse, XmlError, XmlWriter};

/// One carrier operation.
pub(crate) trait Operation {
    /// The success payload.
    type Output;

    /// The operation's fixed facts.
    fn spec(&self) -> OperationSpec;

    /// Client localization, if the operation sends one.
    fn localization(&self) -> Option<Localization> {
        None
    }

    /// Checks inputs that depend on the credentials.
    fn validate(&self, _credentials: &Credentials) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Writes everything after the envelope.
    fn write_body(&self, w: &mut XmlWriter, credentials: &Credentials) -> Result<(), XmlError>;

    /// Extracts the payload from the reply tree under the reply key.
    fn extract(&self, reply: &Value) -> Result<Self::Output, ShipmentError>;

    /// Whether the raw response should be logged at `info`.
    fn debug(&self) -> bool {
        false
    }
}

/// Builds the complete request document for `operation`.
pub(crate) fn build_document<O: Operation>(
    credentials: &Credentials,
    operation: &O,
) -> Result<String, ShipmentError> {
    operation.validate(credentials)?;
    let spec = operation.spec();
    let namespace = spec.namespace_uri();
    let document = XmlWriter::document(spec.root, Some(&namespace), |w| {
        add_envelope(w, credentials, &spec, operation.localization())?;
        operation.write_body(w, credentials)
    })?;
    Ok(document)
}

/// Masks the web service key and password in a request document.
fn redact(document: &str) -> String {
    let mut out = document.to_string();
    for tag in ["Key", "Password"] {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        if let Some(start) = out.find(&open) {
            let from = start + open.len();
            if let Some(len) = out[from..].find(&close) {
                out.replace_range(from..from + len, "*****");
            }
        }
    }
    out
}

/// Runs one request/response cycle for `operation`.
pub(crate) async fn process<O: Operation>(
    client: &HttpClient,
    credentials: &Credentials,
    operation: &O,
    debug: bool,
) -> Result<O::Output, ShipmentError> {
    let spec = operation.spec();
    let document = build_document(credentials, operation)?;
    let url = credentials.api_url();

    tracing::debug!(
        "Posting FedEx {} request to {}: {}",
        spec.name,
        url,
        redact(&document)
    );

    let request = HttpRequest::builder(url).body(document).build()?;
    let response = client.post(request).await?;

    if debug || operation.debug() {
        tracing::info!(
            "FedEx {} response (HTTP {}): {}",
            spec.name,
            response.code,
            response.body
        );
    } else {
        tracing::debug!(
            "FedEx {} response (HTTP {}): {}",
            spec.name,
            response.code,
            response.body
        );
    }

    let tree = NormalizedResponse::parse(&response.body)?;
    match classify::classify(&tree, spec.reply_key, spec.family) {
        Ok(reply) => operation.extract(reply),
        Err(error) => {
            if let ShipmentError::Carrier(carrier) = &error {
                tracing::warn!(
                    "FedEx {} request failed ({}): {}",
                    spec.name,
                    carrier.cause,
                    carrier.message
                );
            }
            Err(error)
        }
    }
}

/// Looks up a required payload element under the reply.
pub(crate) fn required<'a>(
    reply: &'a Value,
    reply_key: &str,
    keys: &[&str],
) -> Result<&'a Value, XmlError> {
    crate::xml::path(reply, keys)
        .filter(|value| !value.is_null())
        .ok_or_else(|| XmlError::MissingElement(format!("{reply_key}.{}", keys.join("."))))
}

/// Looks up a required text payload element under the reply.
pub(crate) fn required_str<'a>(
    reply: &'a Value,
    reply_key: &str,
    keys: &[&str],
) -> Result<&'a str, XmlError> {
    required(reply, reply_key, keys)?.as_str().ok_or_else(|| {
        XmlError::ParseError(format!("{reply_key}.{} is not text", keys.join(".")))
    })
}

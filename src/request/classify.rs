//! Success and failure classification of normalized replies.

use serde_json::Value;

use crate::request::errors::{CarrierError, FailureCause, OperationFamily, ShipmentError};
use crate::xml::{path, NormalizedResponse, XmlError};

/// Severities that count as success.
pub const SUCCESS_SEVERITIES: &[&str] = &["SUCCESS", "WARNING", "NOTE"];

/// Returns the reply's `highest_severity`, if present.
#[must_use]
pub fn severity<'a>(response: &'a NormalizedResponse, reply_key: &str) -> Option<&'a str> {
    response
        .path(&[reply_key, "highest_severity"])
        .and_then(Value::as_str)
}

/// Returns `true` iff `reply_key` is present and its severity is one of
/// [`SUCCESS_SEVERITIES`].
#[must_use]
pub fn is_success(response: &NormalizedResponse, reply_key: &str) -> bool {
    severity(response, reply_key).is_some_and(|s| SUCCESS_SEVERITIES.contains(&s))
}

fn cause_for(severity: Option<&str>) -> FailureCause {
    match severity {
        Some("ERROR") => FailureCause::Validation,
        _ => FailureCause::Failure,
    }
}

fn fault_reason(response: &NormalizedResponse) -> Option<&str> {
    response
        .path(&["fault", "detail", "fault", "reason"])
        .or_else(|| response.path(&["envelope", "body", "fault", "detail", "fault", "reason"]))
        .and_then(Value::as_str)
}

/// Builds the error for a failed reply.
///
/// The message is the first notification's message when the reply is
/// present, otherwise the SOAP fault's reason. When neither can be found
/// the missing element is reported as a parse failure.
#[must_use]
pub fn failure(
    response: &NormalizedResponse,
    reply_key: &str,
    family: OperationFamily,
) -> ShipmentError {
    if let Some(reply) = response.get(reply_key) {
        let message = path(reply, &["notifications", "message"]).and_then(Value::as_str);
        if let Some(message) = message {
            let cause = cause_for(severity(response, reply_key));
            return CarrierError::new(family, cause, message).into();
        }
    }

    if let Some(reason) = fault_reason(response) {
        return CarrierError::new(family, FailureCause::TransportFault, reason).into();
    }

    let missing = if response.get(reply_key).is_some() {
        format!("{reply_key}.notifications.message")
    } else {
        "fault.detail.fault.reason".to_string()
    };
    XmlError::MissingElement(missing).into()
}

/// Returns the success reply tree, or the classified failure.
///
/// # Errors
///
/// Returns [`ShipmentError::Carrier`] for a carrier failure and
/// [`ShipmentError::Parse`] when no failure message can be located.
pub fn classify<'a>(
    response: &'a NormalizedResponse,
    reply_key: &str,
    family: OperationFamily,
) -> Result<&'a Value, ShipmentError> {
    match response.get(reply_key) {
        Some(reply) if is_success(response, reply_key) => Ok(reply),
        _ => Err(failure(response, reply_key, family)),
    }
}

//! Response parsing into normalized trees.
//!
//! FedEx replies (and SOAP faults) are parsed into a [`NormalizedResponse`]:
//! a `serde_json::Value` tree whose keys are canonical snake_case names.
//!
//! Shape rules:
//! - namespace prefixes are dropped (`v18:RateReply` becomes `rate_reply`)
//! - repeated sibling elements collapse into an array
//! - text-only elements become strings, empty elements become `null`
//! - attributes are ignored, as is text mixed with child elements

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::xml::error::XmlError;
use crate::xml::keys::to_canonical;

/// A parsed response with canonical keys.
///
/// # Example
///
/// ```rust
/// use fedex_api::xml::NormalizedResponse;
///
/// let response = NormalizedResponse::parse(
///     "<v5:TrackReply xmlns:v5=\"http://fedex.com/ws/track/v5\">\
///        <v5:HighestSeverity>SUCCESS</v5:HighestSeverity>\
///      </v5:TrackReply>",
/// )
/// .unwrap();
///
/// assert_eq!(
///     response.path(&["track_reply", "highest_severity"]).and_then(|v| v.as_str()),
///     Some("SUCCESS")
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedResponse(Value);

impl NormalizedResponse {
    /// Parses an XML body.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the body is empty, malformed, or truncated.
    pub fn parse(body: &str) -> Result<Self, XmlError> {
        parse_tree(body).map(Self)
    }

    /// Wraps an already-normalized tree.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Returns the top-level value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Walks `keys` from the root. See [`path`].
    #[must_use]
    pub fn path(&self, keys: &[&str]) -> Option<&Value> {
        path(&self.0, keys)
    }

    /// Returns the underlying tree.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the response and returns the underlying tree.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Returns the first element of an array, or the value itself.
///
/// FedEx emits a repeated element once when there is a single item, which
/// the parser cannot tell apart from a non-repeated element.
#[must_use]
pub fn first(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

/// Walks `keys` through nested mappings starting at `value`.
///
/// Whenever an intermediate value is an array, its first element is used.
#[must_use]
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(value, |current, key| first(current)?.get(*key))
}

struct Frame {
    key: String,
    children: Map<String, Value>,
    text: String,
}

impl Frame {
    fn new(key: String) -> Self {
        Self {
            key,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> Value {
        if !self.children.is_empty() {
            return Value::Object(self.children);
        }
        let text = self.text.trim();
        if text.is_empty() {
            Value::Null
        } else {
            Value::String(text.to_string())
        }
    }
}

fn insert_child(map: &mut Map<String, Value>, key: String, value: Value) {
    match map.get_mut(&key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let previous = existing.take();
            *existing = Value::Array(vec![previous, value]);
        }
        None => {
            map.insert(key, value);
        }
    }
}

fn local_key(name: &[u8]) -> Result<String, XmlError> {
    let name = std::str::from_utf8(name).map_err(|e| XmlError::ParseError(e.to_string()))?;
    Ok(to_canonical(name))
}

fn parse_tree(body: &str) -> Result<Value, XmlError> {
    let mut reader = Reader::from_str(body);
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Map<String, Value> = Map::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(Frame::new(local_key(e.local_name().as_ref())?));
            }
            Event::Empty(e) => {
                let key = local_key(e.local_name().as_ref())?;
                match stack.last_mut() {
                    Some(parent) => insert_child(&mut parent.children, key, Value::Null),
                    None => insert_child(&mut root, key, Value::Null),
                }
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or_else(|| {
                    XmlError::ParseError("closing tag without an open element".to_string())
                })?;
                let key = frame.key.clone();
                let value = frame.into_value();
                match stack.last_mut() {
                    Some(parent) => insert_child(&mut parent.children, key, value),
                    None => insert_child(&mut root, key, value),
                }
            }
            Event::Text(e) => {
                if let Some(frame) = stack.last_mut() {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    frame.text.push_str(&decoded);
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::GeneralRef(e) => {
                if let Some(frame) = stack.last_mut() {
                    let char_ref = e
                        .resolve_char_ref()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let resolved = if let Some(ch) = char_ref {
                        ch.to_string()
                    } else {
                        let name = e
                            .decode()
                            .map_err(|err| XmlError::ParseError(err.to_string()))?;
                        quick_xml::escape::resolve_predefined_entity(&name)
                            .map(str::to_string)
                            .ok_or_else(|| {
                                XmlError::ParseError(format!("unknown entity &{name};"))
                            })?
                    };
                    frame.text.push_str(&resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::UnexpectedEof(format!(
            "element '{}' was never closed",
            open.key
        )));
    }
    if root.is_empty() {
        return Err(XmlError::MissingElement("root element".to_string()));
    }

    Ok(Value::Object(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_normalizes_keys_and_strips_prefixes() {
        let response = NormalizedResponse::parse(
            r#"<v18:RateReply xmlns:v18="http://fedex.com/ws/rate/v18">
                 <v18:HighestSeverity>WARNING</v18:HighestSeverity>
                 <v18:RateReplyDetails><v18:ServiceType>FEDEX_GROUND</v18:ServiceType></v18:RateReplyDetails>
               </v18:RateReply>"#,
        )
        .unwrap();

        assert_eq!(
            response.as_value(),
            &json!({
                "rate_reply": {
                    "highest_severity": "WARNING",
                    "rate_reply_details": { "service_type": "FEDEX_GROUND" }
                }
            })
        );
    }

    #[test]
    fn test_repeated_elements_become_arrays() {
        let response = NormalizedResponse::parse(
            "<Reply><Notifications><Message>a</Message></Notifications>\
             <Notifications><Message>b</Message></Notifications>\
             <Notifications><Message>c</Message></Notifications></Reply>",
        )
        .unwrap();

        assert_eq!(
            response.path(&["reply", "notifications"]),
            Some(&json!([{ "message": "a" }, { "message": "b" }, { "message": "c" }]))
        );
        assert_eq!(
            response
                .path(&["reply", "notifications", "message"])
                .and_then(Value::as_str),
            Some("a")
        );
    }

    #[test]
    fn test_empty_elements_are_null_and_entities_resolve() {
        let response = NormalizedResponse::parse(
            "<Reply><Empty/><Blank></Blank><Company>Smith &amp; Sons &#169;</Company></Reply>",
        )
        .unwrap();

        assert_eq!(response.path(&["reply", "empty"]), Some(&Value::Null));
        assert_eq!(response.path(&["reply", "blank"]), Some(&Value::Null));
        assert_eq!(
            response.path(&["reply", "company"]).and_then(Value::as_str),
            Some("Smith & Sons ©")
        );
    }

    #[test]
    fn test_soap_fault_shape() {
        let response = NormalizedResponse::parse(
            r#"<soapenv:Fault xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
                 <faultcode>soapenv:Server</faultcode>
                 <faultstring>Fault</faultstring>
                 <detail><con:fault xmlns:con="http://www.bea.com/wli/sb/context">
                   <con:errorCode>BEA-380000</con:errorCode>
                   <con:reason>Authentication failed</con:reason>
                 </con:fault></detail>
               </soapenv:Fault>"#,
        )
        .unwrap();

        assert_eq!(
            response
                .path(&["fault", "detail", "fault", "reason"])
                .and_then(Value::as_str),
            Some("Authentication failed")
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_truncated_bodies() {
        assert!(matches!(
            NormalizedResponse::parse(""),
            Err(XmlError::MissingElement(_))
        ));
        assert!(matches!(
            NormalizedResponse::parse("not xml at all"),
            Err(XmlError::MissingElement(_))
        ));
        assert!(NormalizedResponse::parse("<RateReply><HighestSeverity>").is_err());
    }

    #[test]
    fn test_path_and_first_helpers() {
        let tree = json!({ "a": [{ "b": "x" }, { "b": "y" }] });
        assert_eq!(path(&tree, &["a", "b"]), Some(&json!("x")));
        assert_eq!(path(&tree, &["a", "missing"]), None);
        assert_eq!(first(&json!([1, 2])), Some(&json!(1)));
        assert_eq!(first(&json!("solo")), Some(&json!("solo")));
        assert_eq!(first(&json!([])), None);
    }
}

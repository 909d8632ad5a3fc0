//! Free-form XML trees for carrier "bag" structures.
//!
//! Customs clearance, special services and SmartPost details follow large,
//! rarely-used FedEx schemas. Rather than modelling every field, callers
//! describe them as a [`Bag`]: an insertion-ordered mapping of snake_case
//! keys to [`Node`] values, rendered generically by
//! [`XmlWriter::bag`](crate::xml::XmlWriter::bag).
//!
//! # Example
//!
//! ```rust
//! use fedex_api::xml::{Bag, Node};
//!
//! let customs = Bag::new()
//!     .with("duties_payment", Bag::new().with("payment_type", "SENDER"))
//!     .with("document_content", "NON_DOCUMENTS")
//!     .with(
//!         "commodities",
//!         vec![
//!             Bag::new().with("description", "Shoes").with("quantity", 2),
//!             Bag::new().with("description", "Socks").with("quantity", 6),
//!         ],
//!     );
//!
//! assert_eq!(customs.len(), 3);
//! assert!(matches!(customs.get("commodities"), Some(Node::Sequence(items)) if items.len() == 2));
//! ```

use serde_json::Value;
use thiserror::Error;

/// A value inside a [`Bag`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A leaf rendered as element text.
    Scalar(String),
    /// Repeated elements, each rendered under the owning key.
    Sequence(Vec<Node>),
    /// A nested element with its own children.
    Mapping(Bag),
}

/// An insertion-ordered mapping of keys to [`Node`] values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bag {
    entries: Vec<(String, Node)>,
}

impl Bag {
    /// Creates an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry and returns the bag, for chained construction.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends an entry. Keys may repeat; order is preserved.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bag has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Bag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<Bag> for Node {
    fn from(bag: Bag) -> Self {
        Self::Mapping(bag)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Scalar(value.to_string())
    }
}

macro_rules! node_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )+
    };
}

node_from_number!(i32, i64, u32, u64, usize, f64);

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Error returned when a JSON value cannot be used as a [`Bag`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("a bag must be built from a JSON object")]
pub struct NotAnObject;

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(String::new()),
            Value::String(s) => Self::Scalar(s),
            Value::Bool(b) => Self::from(b),
            Value::Number(n) => Self::Scalar(n.to_string()),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(map.into_iter().collect()),
        }
    }
}

impl TryFrom<Value> for Bag {
    type Error = NotAnObject;

    /// Builds a bag from a JSON object, keeping its key order.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(NotAnObject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bag_preserves_insertion_order() {
        let bag = Bag::new()
            .with("zeta", "1")
            .with("alpha", "2")
            .with("mid", "3");
        let keys: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Node::from(2), Node::Scalar("2".to_string()));
        assert_eq!(Node::from(12.5), Node::Scalar("12.5".to_string()));
        assert_eq!(Node::from(true), Node::Scalar("true".to_string()));
    }

    #[test]
    fn test_try_from_json_keeps_object_order() {
        let bag = Bag::try_from(json!({
            "duties_payment": { "payment_type": "SENDER" },
            "customs_value": { "currency": "USD", "amount": 100 },
            "commodities": [{ "name": "a" }, { "name": "b" }],
            "empty": null
        }))
        .unwrap();

        let keys: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["duties_payment", "customs_value", "commodities", "empty"]
        );
        assert_eq!(bag.get("empty"), Some(&Node::Scalar(String::new())));
        match bag.get("customs_value") {
            Some(Node::Mapping(inner)) => {
                assert_eq!(inner.get("amount"), Some(&Node::Scalar("100".to_string())));
            }
            other => panic!("expected mapping, got {other:?}"),
        }
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        assert_eq!(Bag::try_from(json!([1, 2])), Err(NotAnObject));
        assert_eq!(Bag::try_from(json!("x")), Err(NotAnObject));
        assert_eq!(
            NotAnObject.to_string(),
            "a bag must be built from a JSON object"
        );
    }
}

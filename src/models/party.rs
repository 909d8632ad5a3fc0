//! Shipper, recipient and billing parties.

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// Only the first two street lines are ever sent to the carrier; any
/// additional lines are dropped.
///
/// # Example
///
/// ```rust
/// use fedex_api::models::Address;
///
/// let address = Address {
///     street_lines: vec!["350 5th Ave".to_string(), "Floor 20".to_string()],
///     city: "New York".to_string(),
///     state: "NY".to_string(),
///     postal_code: "10118".to_string(),
///     country_code: "US".to_string(),
///     residential: Some(false),
/// };
///
/// assert!(address.is_us());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// Street lines in order.
    #[serde(default)]
    pub street_lines: Vec<String>,

    /// City name.
    pub city: String,

    /// State or province code.
    pub state: String,

    /// Postal or ZIP code.
    pub postal_code: String,

    /// Two-letter country code.
    pub country_code: String,

    /// Whether the address is residential, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,
}

impl Address {
    /// Returns `true` if the country code is `US` (any case).
    #[must_use]
    pub fn is_us(&self) -> bool {
        self.country_code.trim().eq_ignore_ascii_case("US")
    }

    /// Returns `true` only if the address is explicitly flagged residential.
    #[must_use]
    pub fn is_residential(&self) -> bool {
        self.residential == Some(true)
    }
}

/// A contact person.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Contact {
    /// Full name of the person.
    pub person_name: String,

    /// Company name.
    #[serde(default)]
    pub company_name: String,

    /// Phone number.
    pub phone_number: String,

    /// Job title. Only sent in freight billing contacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A contact at an address: shipper, recipient, pickup location or
/// freight billing party.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Party {
    pub contact: Contact,
    pub address: Address,
}

impl Party {
    /// Creates a party from a contact and an address.
    #[must_use]
    pub const fn new(contact: Contact, address: Address) -> Self {
        Self { contact, address }
    }

    /// Returns the contact's company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.contact.company_name
    }
}

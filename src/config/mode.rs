//! FedEx environment selection.
//!
//! This module provides the [`Mode`] enum, which decides which FedEx gateway
//! a request is posted to.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// FedEx production gateway.
pub const PRODUCTION_URL: &str = "https://gateway.fedex.com:443/xml/";

/// FedEx test (beta) gateway.
pub const TEST_URL: &str = "https://gatewaybeta.fedex.com:443/xml/";

/// The environment a set of credentials belongs to.
///
/// `Staging` resolves to the production gateway: FedEx's staging credential
/// pool only authenticates against the production URL. Every mode other than
/// `Production` and `Staging` resolves to the test gateway.
///
/// # Example
///
/// ```rust
/// use fedex_api::{Mode, PRODUCTION_URL, TEST_URL};
///
/// assert_eq!(Mode::Production.endpoint(), PRODUCTION_URL);
/// assert_eq!(Mode::Staging.endpoint(), PRODUCTION_URL);
///
/// let mode: Mode = "development".parse().unwrap();
/// assert_eq!(mode.endpoint(), TEST_URL);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Live production credentials.
    Production,
    /// Staging credentials; posted to the production gateway.
    Staging,
    /// Developer test credentials.
    Development,
    /// Any other environment name; posted to the test gateway.
    Custom(String),
}

impl Mode {
    /// Returns the gateway URL requests in this mode are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Production | Self::Staging => PRODUCTION_URL,
            Self::Development | Self::Custom(_) => TEST_URL,
        }
    }

    /// Returns `true` if this mode posts to the production gateway.
    #[must_use]
    pub const fn is_production_gateway(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Staging => f.write_str("staging"),
            Self::Development => f.write_str("development"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

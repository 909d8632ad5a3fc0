//! Credential and environment configuration for the FedEx API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Credentials`]: The immutable credential set shared by every request
//! - [`CredentialsBuilder`]: A builder for constructing [`Credentials`] instances
//! - [`Mode`]: Environment selector that decides the gateway URL
//! - [`ServiceKey`], [`Password`], [`AccountNumber`], [`MeterNumber`]: Validated newtypes
//! - [`HostUrl`]: A validated endpoint override
//!
//! # Example
//!
//! ```rust
//! use fedex_api::{AccountNumber, Credentials, MeterNumber, Mode, Password, ServiceKey};
//!
//! let credentials = Credentials::builder()
//!     .key(ServiceKey::new("key").unwrap())
//!     .password(Password::new("password").unwrap())
//!     .account_number(AccountNumber::new("510087020").unwrap())
//!     .meter(MeterNumber::new("118546765").unwrap())
//!     .mode(Mode::Development)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(credentials.account_number().as_ref(), "510087020");
//! ```

mod mode;
mod newtypes;

pub use mode::{Mode, PRODUCTION_URL, TEST_URL};
pub use newtypes::{AccountNumber, HostUrl, MeterNumber, Password, ServiceKey};

use crate::error::ConfigError;

/// FedEx web service credentials.
///
/// Credentials are validated once at construction and never change afterwards,
/// so a single instance can be shared by concurrent requests.
#[derive(Clone, Debug)]
pub struct Credentials {
    key: ServiceKey,
    password: Password,
    account_number: AccountNumber,
    meter: MeterNumber,
    mode: Mode,
    freight_account_number: Option<AccountNumber>,
    endpoint: Option<HostUrl>,
}

impl Credentials {
    /// Creates a new builder for constructing `Credentials`.
    #[must_use]
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::new()
    }

    /// Returns the web service key.
    #[must_use]
    pub const fn key(&self) -> &ServiceKey {
        &self.key
    }

    /// Returns the web service password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the shipping account number.
    #[must_use]
    pub const fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    /// Returns the meter number.
    #[must_use]
    pub const fn meter(&self) -> &MeterNumber {
        &self.meter
    }

    /// Returns the environment mode.
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Returns the FedEx Freight account number, if configured.
    #[must_use]
    pub const fn freight_account_number(&self) -> Option<&AccountNumber> {
        self.freight_account_number.as_ref()
    }

    /// Returns the endpoint override, if configured.
    #[must_use]
    pub const fn endpoint_override(&self) -> Option<&HostUrl> {
        self.endpoint.as_ref()
    }

    /// Returns the URL requests are posted to.
    ///
    /// The endpoint override wins when set; otherwise the URL is selected by
    /// [`Mode::endpoint`].
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.endpoint
            .as_ref()
            .map_or_else(|| self.mode.endpoint(), |url| url.as_ref())
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};

/// Builder for constructing [`Credentials`] instances.
///
/// Required fields are `key`, `password`, `account_number`, `meter` and
/// `mode`. `freight_account_number` and `endpoint` are optional.
#[derive(Debug, Default)]
pub struct CredentialsBuilder {
    key: Option<ServiceKey>,
    password: Option<Password>,
    account_number: Option<AccountNumber>,
    meter: Option<MeterNumber>,
    mode: Option<Mode>,
    freight_account_number: Option<AccountNumber>,
    endpoint: Option<HostUrl>,
}

impl CredentialsBuilder {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the web service key (required).
    #[must_use]
    pub fn key(mut self, key: ServiceKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Sets the web service password (required).
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the shipping account number (required).
    #[must_use]
    pub fn account_number(mut self, account_number: AccountNumber) -> Self {
        self.account_number = Some(account_number);
        self
    }

    /// Sets the meter number (required).
    #[must_use]
    pub fn meter(mut self, meter: MeterNumber) -> Self {
        self.meter = Some(meter);
        self
    }

    /// Sets the environment mode (required).
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the FedEx Freight account number used by freight shipments.
    #[must_use]
    pub fn freight_account_number(mut self, account_number: AccountNumber) -> Self {
        self.freight_account_number = Some(account_number);
        self
    }

    /// Posts requests to `endpoint` instead of the mode-selected gateway.
    #[must_use]
    pub fn endpoint(mut self, endpoint: HostUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Builds the [`Credentials`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first
    /// required field that was not set.
    pub fn build(self) -> Result<Credentials, ConfigError> {
        let key = self
            .key
            .ok_or(ConfigError::MissingRequiredField { field: "key" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;
        let account_number = self
            .account_number
            .ok_or(ConfigError::MissingRequiredField {
                field: "account_number",
            })?;
        let meter = self
            .meter
            .ok_or(ConfigError::MissingRequiredField { field: "meter" })?;
        let mode = self
            .mode
            .ok_or(ConfigError::MissingRequiredField { field: "mode" })?;

        Ok(Credentials {
            key,
            password,
            account_number,
            meter,
            mode,
            freight_account_number: self.freight_account_number,
            endpoint: self.endpoint,
        })
    }
}

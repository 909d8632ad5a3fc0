//! The public entry point for carrier operations.
//!
//! [`Shipment`] binds one set of [`Credentials`] to an HTTP client and
//! exposes every carrier operation as an async method.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::HttpClient;
use crate::config::Credentials;
use crate::models::{
    AddressValidationResult, FreightBillingPolicy, LabelResult, NamedAccountBilling,
};
use crate::request::{
    self, AddressValidation, AddressValidationRequest, CancelPickup, CancelPickupRequest,
    DeleteShipment, DeleteShipmentRequest, DocumentUpload, Label, Pickup,
    PickupAvailability, PickupAvailabilityRequest, PickupRequest, Rate, ShipmentError,
    ShipmentRequest, Track, TrackRequest, UploadDocuments,
};

/// FedEx web services client.
///
/// Each method is one request/response cycle: the request is validated,
/// rendered, posted once and the reply classified. Nothing is retried;
/// label and pickup creation are not idempotent.
///
/// # Thread Safety
///
/// `Shipment` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fedex_api::{Credentials, Mode, Shipment, ShipmentRequest, ServiceKey, Password,
///     AccountNumber, MeterNumber};
///
/// let credentials = Credentials::builder()
///     .key(ServiceKey::new("key")?)
///     .password(Password::new("password")?)
///     .account_number(AccountNumber::new("510087020")?)
///     .meter(MeterNumber::new("118546765")?)
///     .mode(Mode::Development)
///     .build()?;
///
/// let fedex = Shipment::new(credentials)?;
/// let rates = fedex.rate(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Shipment {
    credentials: Credentials,
    http_client: HttpClient,
    freight_policy: Arc<dyn FreightBillingPolicy>,
    debug: bool,
}

// Verify Shipment is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Shipment>();
};

impl Shipment {
    /// Creates a client for `credentials`.
    ///
    /// Freight role and payment type fall back to [`NamedAccountBilling`]
    /// with no named account until [`Shipment::with_freight_policy`] is
    /// called.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentError::Http`] if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self, ShipmentError> {
        let http_client = HttpClient::new(None)?;
        Ok(Self {
            credentials,
            http_client,
            freight_policy: Arc::new(NamedAccountBilling::default()),
            debug: false,
        })
    }

    /// Replaces the freight billing fallback policy.
    #[must_use]
    pub fn with_freight_policy(mut self, policy: impl FreightBillingPolicy + 'static) -> Self {
        self.freight_policy = Arc::new(policy);
        self
    }

    /// Logs every raw response at `info`.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Quotes a shipment and returns the `rate_reply_details` tree.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentError::Config`] when freight billing is requested
    /// without a freight account, otherwise any carrier, parse or HTTP
    /// failure.
    pub async fn rate(&self, request: &ShipmentRequest) -> Result<Value, ShipmentError> {
        let operation = Rate {
            request,
            policy: self.freight_policy.as_ref(),
        };
        self.process(&operation).await
    }

    /// Creates a shipment and returns its label.
    ///
    /// # Errors
    ///
    /// Returns [`ShipmentError::Config`] without a service type, or for a
    /// freight service without a freight billing party and account.
    pub async fn label(&self, request: &ShipmentRequest) -> Result<LabelResult, ShipmentError> {
        let operation = Label {
            request,
            policy: self.freight_policy.as_ref(),
        };
        self.process(&operation).await
    }

    /// Deletes a shipment. Returns `true` once the carrier accepts.
    ///
    /// # Errors
    ///
    /// Carrier failures are reported in the [`OperationFamily::Label`]
    /// family.
    ///
    /// [`OperationFamily::Label`]: crate::OperationFamily::Label
    pub async fn delete_shipment(
        &self,
        request: &DeleteShipmentRequest,
    ) -> Result<bool, ShipmentError> {
        self.process(&DeleteShipment(request)).await
    }

    /// Returns the `track_details` tree for a package.
    ///
    /// # Errors
    ///
    /// Returns any carrier, parse or HTTP failure.
    pub async fn track(&self, request: &TrackRequest) -> Result<Value, ShipmentError> {
        self.process(&Track(request)).await
    }

    /// Schedules a pickup and returns its confirmation number.
    ///
    /// # Errors
    ///
    /// Returns any carrier, parse or HTTP failure.
    pub async fn pickup(&self, request: &PickupRequest) -> Result<String, ShipmentError> {
        self.process(&Pickup(request)).await
    }

    /// Cancels a pickup. Returns `true` once the carrier accepts.
    ///
    /// # Errors
    ///
    /// Returns any carrier, parse or HTTP failure.
    pub async fn cancel_pickup(&self, request: &CancelPickupRequest) -> Result<bool, ShipmentError> {
        self.process(&CancelPickup(request)).await
    }

    /// Returns the full pickup availability reply.
    ///
    /// # Errors
    ///
    /// Returns any carrier, parse or HTTP failure.
    pub async fn pickup_availability(
        &self,
        request: &PickupAvailabilityRequest,
    ) -> Result<Value, ShipmentError> {
        self.process(&PickupAvailability(request)).await
    }

    /// Validates an address.
    ///
    /// # Errors
    ///
    /// Returns any carrier, parse or HTTP failure.
    pub async fn validate_address(
        &self,
        request: &AddressValidationRequest,
    ) -> Result<AddressValidationResult, ShipmentError> {
        self.process(&AddressValidation(request)).await
    }

    /// Returns whether the carrier classifies the address as residential.
    ///
    /// Undetermined and unavailable classifications count as residential.
    ///
    /// # Errors
    ///
    /// Returns any carrier, parse or HTTP failure.
    pub async fn verify_residential(
        &self,
        request: &AddressValidationRequest,
    ) -> Result<bool, ShipmentError> {
        Ok(self.validate_address(request).await?.is_residential())
    }

    /// Uploads a trade document and returns the full reply.
    ///
    /// # Errors
    ///
    /// Returns any carrier, parse or HTTP failure.
    pub async fn upload_document(&self, upload: &DocumentUpload) -> Result<Value, ShipmentError> {
        self.process(&UploadDocuments(upload)).await
    }

    async fn process<O: request::Operation>(
        &self,
        operation: &O,
    ) -> Result<O::Output, ShipmentError> {
        request::process(&self.http_client, &self.credentials, operation, self.debug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountNumber, MeterNumber, Mode, Password, ServiceKey};
    use crate::models::Party;

    fn credentials() -> Credentials {
        Credentials::builder()
            .key(ServiceKey::new("k").unwrap())
            .password(Password::new("p").unwrap())
            .account_number(AccountNumber::new("510087020").unwrap())
            .meter(MeterNumber::new("118546765").unwrap())
            .mode(Mode::Development)
            .build()
            .unwrap()
    }

    #[derive(Debug)]
    struct AlwaysRecipient;

    impl FreightBillingPolicy for AlwaysRecipient {
        fn role(&self, _recipient: &Party) -> String {
            "RECIPIENT".to_string()
        }

        fn payment_type(&self, _recipient: &Party) -> String {
            "COLLECT".to_string()
        }
    }

    #[test]
    fn test_new_uses_credentials_endpoint() {
        let shipment = Shipment::new(credentials()).unwrap();
        assert_eq!(
            shipment.credentials().api_url(),
            "https://gatewaybeta.fedex.com:443/xml/"
        );
        assert!(!shipment.debug);
    }

    #[test]
    fn test_with_freight_policy_replaces_default() {
        let shipment = Shipment::new(credentials())
            .unwrap()
            .with_freight_policy(AlwaysRecipient)
            .with_debug(true);
        assert_eq!(shipment.freight_policy.role(&Party::default()), "RECIPIENT");
        assert!(shipment.debug);
    }
}

//! # FedEx Web Services Rust SDK
//!
//! An async client for the FedEx XML web services: rate quotes, shipping
//! labels, tracking, pickups, address validation and trade document upload.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Validated credentials via [`Credentials`] and [`CredentialsBuilder`]
//! - Typed request builders for every operation, validated before anything
//!   is sent
//! - A [`Shipment`] facade exposing each operation as one async call
//! - Carrier replies normalized into `snake_case` trees
//!   ([`xml::NormalizedResponse`]) and classified into success payloads or
//!   a typed [`ShipmentError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fedex_api::{AccountNumber, Credentials, MeterNumber, Mode, Password, ServiceKey};
//!
//! let credentials = Credentials::builder()
//!     .key(ServiceKey::new("your-key").unwrap())
//!     .password(Password::new("your-password").unwrap())
//!     .account_number(AccountNumber::new("510087020").unwrap())
//!     .meter(MeterNumber::new("118546765").unwrap())
//!     .mode(Mode::Development)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(credentials.api_url(), "https://gatewaybeta.fedex.com:443/xml/");
//! ```
//!
//! ## Rating a Shipment
//!
//! ```rust,ignore
//! use fedex_api::models::{service_types, Package, Weight};
//! use fedex_api::{Shipment, ShipmentRequest};
//!
//! let fedex = Shipment::new(credentials)?;
//!
//! let request = ShipmentRequest::builder()
//!     .shipper(shipper)
//!     .recipient(recipient)
//!     .package(Package::new(Weight::lb(10.0)))
//!     .service_type(service_types::FEDEX_GROUND)
//!     .build()?;
//!
//! let details = fedex.rate(&request).await?;
//! ```
//!
//! ## Labels
//!
//! Package services return one label image and a tracking number. Freight
//! services also return a bill of lading:
//!
//! ```rust,ignore
//! use fedex_api::LabelResult;
//!
//! match fedex.label(&request).await? {
//!     LabelResult::Package { tracking_number, .. } => println!("{tracking_number}"),
//!     LabelResult::Freight { tracking_number, encoded_bill_of_lading, .. } => {
//!         println!("{tracking_number}: {} bytes", encoded_bill_of_lading.len());
//!     }
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`ShipmentError`]:
//! - [`ShipmentError::Config`]: a required credential or request field is
//!   missing; nothing was sent
//! - [`ShipmentError::Carrier`]: the carrier rejected the request; the
//!   [`CarrierError`] carries its message verbatim
//! - [`ShipmentError::Parse`]: the response could not be understood
//! - [`ShipmentError::Http`]: the request never completed
//!
//! ## Design Principles
//!
//! - **No global state**: Credentials are instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes and builders validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Label and pickup creation are not idempotent

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
mod shipment;
pub mod xml;

// Re-export public types at crate root for convenience
pub use config::{
    AccountNumber, Credentials, CredentialsBuilder, HostUrl, MeterNumber, Mode, Password,
    ServiceKey, PRODUCTION_URL, TEST_URL,
};
pub use error::ConfigError;

pub use models::{AddressValidationResult, LabelResult};

pub use request::{
    AddressValidationRequest, AddressValidationVersion, CancelPickupRequest, CarrierError,
    DeleteShipmentRequest, DocumentUpload, FailureCause, OperationFamily, PickupAvailabilityRequest,
    PickupRequest, ShipmentError, ShipmentRequest, TrackRequest,
};

pub use shipment::Shipment;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpRequest, HttpResponse};

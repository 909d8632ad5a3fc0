//! Domain types shared by every carrier operation.
//!
//! - [`Party`], [`Contact`] and [`Address`] describe shippers, recipients,
//!   pickup locations and freight billing parties
//! - [`Package`] with [`Weight`] and [`Dimensions`]
//! - [`ServiceType`] and the code constants in [`service_types`],
//!   [`packaging_types`] and [`drop_off_types`]
//! - [`ShippingOptions`] and the pluggable [`FreightBillingPolicy`]
//! - result types returned by the facade: [`LabelResult`] and
//!   [`AddressValidationResult`]

mod options;
mod package;
mod party;
mod results;
mod service;

pub use options::{
    FreightBillingPolicy, MultiPieceShipment, NamedAccountBilling, ShippingOptions,
    DEFAULT_FREIGHT_CLASS, DEFAULT_FREIGHT_DESCRIPTION,
};
pub use package::{Dimensions, LinearUnits, Package, Weight, WeightUnits};
pub use party::{Address, Contact, Party};
pub use results::{AddressValidationResult, LabelResult, RESIDENTIAL_STATUSES};
pub use service::{
    drop_off_types, packaging_types, service_types, LabelImageType, ServiceType,
};

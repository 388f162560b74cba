//! Property record wiring.
//!
//! This module wraps `data/property.json` so page builders can load a
//! validated snapshot and read consistent derivations from it. Types here
//! mirror the schema fields; callers use `PropertyCatalog` for derived views
//! and `CatalogRepository` when several records are loaded side by side.

pub mod identity;
pub mod index;
pub mod model;
pub mod repository;

#[cfg(test)]
pub(crate) mod fixtures;

pub use identity::{BookingPeriod, ContactRole, PropertyId};
pub use index::{PropertyCatalog, SchemaAmenity};
pub use model::{
    Address, Amenity, AmenityCategory, BedConfiguration, BookingTerms, CancellationPolicy,
    CancellationTier, Company, Contact, Coordinates, GalleryImage, HouseRules, Links,
    PaymentSchedule, Property, PropertyImages, PropertyLocation, PropertySpecs, QuietHours,
    SecurityDeposit, Seo,
};
pub use repository::CatalogRepository;

pub use model::load_property_from_path;

//! Deserializable representation of `data/property.json`.
//!
//! The types mirror `schema/property.schema.json`. The pure derivations that
//! only need one part of the record (address formatting, contact selection,
//! cancellation tiers) live on the part itself; `PropertyCatalog` exposes them
//! over a validated record.

use crate::catalog::identity::{BookingPeriod, ContactRole, PropertyId};
use crate::error::CatalogError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
/// Full property record as stored on disk.
pub struct Property {
    pub schema_version: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub identifier: PropertyId,
    #[serde(default)]
    pub property_type: Option<String>,
    pub location: PropertyLocation,
    pub specs: PropertySpecs,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    pub beds: Vec<BedConfiguration>,
    pub images: PropertyImages,
    pub amenities: Vec<AmenityCategory>,
    #[serde(default)]
    pub highlight_amenities: Vec<String>,
    #[serde(default)]
    pub links: Links,
    pub company: Company,
    pub house_rules: HouseRules,
    pub booking_terms: BookingTerms,
    #[serde(default)]
    pub seo: Option<Seo>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PropertyLocation {
    #[serde(default)]
    pub address: Address,
    pub coordinates: Coordinates,
    pub timezone: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
/// Postal address; every field may be absent and then renders as empty.
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PropertySpecs {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub max_guests: u32,
    #[serde(default)]
    pub square_footage: Option<u32>,
    pub levels: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
/// One sleeping space and the floor it is on (0 = lowest level).
pub struct BedConfiguration {
    pub room: String,
    pub beds: String,
    pub level: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Image ids handed to the external image-delivery service.
pub struct PropertyImages {
    pub hero: String,
    pub og_image: String,
    pub gallery: Vec<GalleryImage>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AmenityCategory {
    pub category: String,
    pub items: Vec<Amenity>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Amenity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Short tag used in schema.org `amenityFeature` output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Links {
    #[serde(default)]
    pub airbnb: Option<String>,
    #[serde(default)]
    pub vrbo: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: ContactRole,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HouseRules {
    pub quiet_hours: QuietHours,
    /// Booking limit; may be lower than what the property sleeps.
    pub max_guests: u32,
    #[serde(default)]
    pub no_smoking: bool,
    #[serde(default)]
    pub no_parties: bool,
    #[serde(default)]
    pub no_commercial_photography: bool,
    #[serde(default)]
    pub general_rules: Vec<String>,
    #[serde(default)]
    pub sports_court_rules: Vec<String>,
    #[serde(default)]
    pub safety_devices: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
/// Local `HH:MM` times; `end` may be earlier than `start` (overnight).
pub struct QuietHours {
    pub start: String,
    pub end: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BookingTerms {
    pub security_deposit: SecurityDeposit,
    pub payment_schedule: PaymentSchedule,
    pub cancellation: CancellationPolicy,
    #[serde(default)]
    pub peak_periods: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SecurityDeposit {
    pub amount: u32,
    pub currency: String,
    #[serde(default)]
    pub refund_days: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PaymentSchedule {
    pub deposit_percent: u32,
    pub balance_due_days: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Refund tiers for standard and peak stays, each sorted by descending notice.
pub struct CancellationPolicy {
    pub standard: Vec<CancellationTier>,
    pub peak: Vec<CancellationTier>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CancellationTier {
    /// Smallest number of days before arrival this tier covers.
    pub min_days_before_arrival: u32,
    pub label: String,
    pub refund: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Address {
    /// `street, city, region postal_code, country`; absent fields stay empty.
    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.region, self.postal_code, self.country
        )
    }
}

impl Company {
    /// The property manager, else the first contact listed.
    pub fn primary_contact(&self) -> Result<&Contact, CatalogError> {
        self.contact_with_role(&ContactRole::PropertyManager)
            .or_else(|| self.contacts.first())
            .ok_or_else(|| CatalogError::NoContacts {
                company: self.name.clone(),
            })
    }

    pub fn owner_contact(&self) -> Option<&Contact> {
        self.contact_with_role(&ContactRole::Owner)
    }

    pub fn contact_with_role(&self, role: &ContactRole) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.role == role)
    }
}

impl CancellationPolicy {
    pub fn tiers(&self, period: BookingPeriod) -> &[CancellationTier] {
        match period {
            BookingPeriod::Standard => &self.standard,
            BookingPeriod::Peak => &self.peak,
        }
    }

    /// First tier whose threshold the notice meets.
    ///
    /// Returns `None` only for tier lists that do not bottom out at 0 days,
    /// which validation rejects.
    pub fn tier_for(
        &self,
        days_before_arrival: u32,
        period: BookingPeriod,
    ) -> Option<&CancellationTier> {
        self.tiers(period)
            .iter()
            .find(|tier| days_before_arrival >= tier.min_days_before_arrival)
    }
}

/// Read and parse a property record from disk without additional validation.
pub fn load_property_from_path(path: &Path) -> Result<Property> {
    let data = fs::read_to_string(path)?;
    let property: Property = serde_json::from_str(&data)?;
    Ok(property)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, role: ContactRole) -> Contact {
        Contact {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+1 555 0100".to_string(),
            role,
        }
    }

    fn company(contacts: Vec<Contact>) -> Company {
        Company {
            name: "Sirrom Properties".to_string(),
            contacts,
        }
    }

    fn tier(min: u32, label: &str) -> CancellationTier {
        CancellationTier {
            min_days_before_arrival: min,
            label: label.to_string(),
            refund: format!("{label} refund"),
        }
    }

    #[test]
    fn formats_full_address() {
        let address = Address {
            street: "5587 Currie Bowl Wy".to_string(),
            city: "Fernie Alpine Resort".to_string(),
            region: "British Columbia".to_string(),
            postal_code: "V0B 1M6".to_string(),
            country: "Canada".to_string(),
        };
        assert_eq!(
            address.formatted(),
            "5587 Currie Bowl Wy, Fernie Alpine Resort, British Columbia V0B 1M6, Canada"
        );
    }

    #[test]
    fn missing_address_fields_render_empty() {
        let address: Address =
            serde_json::from_str(r#"{"city": "Fernie", "country": "Canada"}"#).unwrap();
        assert_eq!(address.formatted(), ", Fernie,  , Canada");
    }

    #[test]
    fn property_manager_wins_regardless_of_order() {
        let owner_first = company(vec![
            contact("Robyn", ContactRole::Owner),
            contact("Bo", ContactRole::PropertyManager),
        ]);
        assert_eq!(owner_first.primary_contact().unwrap().name, "Bo");

        let manager_first = company(vec![
            contact("Bo", ContactRole::PropertyManager),
            contact("Robyn", ContactRole::Owner),
        ]);
        assert_eq!(manager_first.primary_contact().unwrap().name, "Bo");
    }

    #[test]
    fn primary_falls_back_to_first_contact() {
        let no_manager = company(vec![
            contact("Robyn", ContactRole::Owner),
            contact("Sam", ContactRole::Other("cleaner".to_string())),
        ]);
        assert_eq!(no_manager.primary_contact().unwrap().name, "Robyn");
    }

    #[test]
    fn primary_contact_on_empty_list_is_a_configuration_error() {
        let err = company(Vec::new()).primary_contact().unwrap_err();
        assert_eq!(
            err,
            CatalogError::NoContacts {
                company: "Sirrom Properties".to_string()
            }
        );
        assert_eq!(err.kind(), crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn owner_contact_is_optional() {
        let managed = company(vec![contact("Bo", ContactRole::PropertyManager)]);
        assert!(managed.owner_contact().is_none());
        assert!(company(Vec::new()).owner_contact().is_none());
    }

    #[test]
    fn tier_for_respects_thresholds() {
        let policy = CancellationPolicy {
            standard: vec![tier(60, "60+"), tier(30, "30-59"), tier(0, "<30")],
            peak: vec![tier(90, "90+"), tier(0, "<90")],
        };
        let label = |days, period| policy.tier_for(days, period).map(|t| t.label.as_str());
        assert_eq!(label(365, BookingPeriod::Standard), Some("60+"));
        assert_eq!(label(60, BookingPeriod::Standard), Some("60+"));
        assert_eq!(label(59, BookingPeriod::Standard), Some("30-59"));
        assert_eq!(label(0, BookingPeriod::Standard), Some("<30"));
        assert_eq!(label(60, BookingPeriod::Peak), Some("<90"));
    }

    #[test]
    fn tier_for_without_zero_floor_is_none() {
        let policy = CancellationPolicy {
            standard: vec![tier(30, "30+")],
            peak: Vec::new(),
        };
        assert!(policy.tier_for(10, BookingPeriod::Standard).is_none());
        assert!(policy.tier_for(10, BookingPeriod::Peak).is_none());
    }

    #[test]
    fn misspelled_top_level_key_is_rejected() {
        let mut value = crate::catalog::fixtures::sample_property_json();
        let record = value.as_object_mut().unwrap();
        let check_in = record.remove("check_in").unwrap();
        record.insert("checkin".to_string(), check_in);
        let err = serde_json::from_value::<Property>(value).unwrap_err();
        assert!(err.to_string().contains("checkin"), "{err}");
    }
}

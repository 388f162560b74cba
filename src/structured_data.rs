//! schema.org `VacationRental` JSON-LD for search engines.
//!
//! Image fields carry raw image ids; resolving them to delivery URLs is left
//! to whatever serves the images.

use crate::catalog::PropertyCatalog;
use serde_json::{Map, Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Build the `VacationRental` block for a validated property.
pub fn vacation_rental(catalog: &PropertyCatalog) -> Value {
    let property = catalog.property();
    let address = &property.location.address;
    let coordinates = property.location.coordinates;

    let mut doc = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "VacationRental",
        "name": property.name,
        "description": property.description,
        "identifier": property.identifier,
        "image": property.images.hero,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": address.street,
            "addressLocality": address.city,
            "addressRegion": address.region,
            "postalCode": address.postal_code,
            "addressCountry": address.country,
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": coordinates.latitude,
            "longitude": coordinates.longitude,
        },
        "amenityFeature": catalog.schema_amenities(),
        "containsPlace": {
            "@type": "Accommodation",
            "additionalType": "EntirePlace",
            "numberOfBedrooms": property.specs.bedrooms,
            "numberOfBathroomsTotal": property.specs.bathrooms,
            "occupancy": {
                "@type": "QuantitativeValue",
                "value": property.specs.max_guests,
            },
        },
    });

    if let Some(fields) = doc.as_object_mut() {
        insert_optional(fields, "checkinTime", property.check_in.as_deref());
        insert_optional(fields, "checkoutTime", property.check_out.as_deref());
        if let Some(airbnb) = property.links.airbnb.as_deref() {
            fields.insert("sameAs".to_string(), json!([airbnb]));
        }
    }
    doc
}

fn insert_optional(fields: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        fields.insert(key.to_string(), Value::String(value.to_string()));
    }
}

//! Validated, read-only view of one property record.
//!
//! `PropertyCatalog::load` runs the JSON Schema, checks the declared
//! `schema_version`, and applies `validate_property` before handing out a
//! catalog. After that every accessor is a pure read; the only caller-visible
//! failure is `primary_contact` on a record with no contacts.

use crate::catalog::load_property_from_path;
use crate::catalog::{
    Amenity, BedConfiguration, BookingPeriod, CancellationTier, Contact, GalleryImage, Property,
    PropertyId,
};
use crate::error::CatalogError;
use crate::schema_loader::{SchemaLoadOptions, load_json_schema};
use crate::validation::validate_property;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SCHEMA_FILE: &str = "schema/property.schema.json";

/// One schema.org `LocationFeatureSpecification` entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SchemaAmenity<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub value: bool,
}

#[derive(Debug)]
/// Property record that passed schema and record-level validation.
pub struct PropertyCatalog {
    property: Property,
}

impl PropertyCatalog {
    /// Load and validate a record from disk.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;

        let property =
            load_property_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        let catalog =
            Self::from_property(property).with_context(|| format!("validating {}", path.display()))?;
        debug!(
            path = %path.display(),
            identifier = %catalog.id(),
            amenities = catalog.all_amenities().len(),
            gallery = catalog.property.images.gallery.len(),
            "loaded property record"
        );
        Ok(catalog)
    }

    /// Wrap an in-memory record after the record-level checks.
    pub fn from_property(property: Property) -> Result<Self> {
        let errors = validate_property(&property);
        if !errors.is_empty() {
            bail!(
                "property '{}' failed validation:\n{}",
                property.identifier,
                errors.join("\n")
            );
        }
        warn_on_soft_anomalies(&property);
        Ok(Self { property })
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn id(&self) -> &PropertyId {
        &self.property.identifier
    }

    /// Every amenity, category order then in-category order.
    pub fn all_amenities(&self) -> Vec<&Amenity> {
        self.property
            .amenities
            .iter()
            .flat_map(|category| category.items.iter())
            .collect()
    }

    /// Amenities as schema.org features, named by schema tag when present.
    pub fn schema_amenities(&self) -> Vec<SchemaAmenity<'_>> {
        self.all_amenities()
            .into_iter()
            .map(|amenity| SchemaAmenity {
                kind: "LocationFeatureSpecification",
                name: amenity.schema_name.as_deref().unwrap_or(&amenity.name),
                value: true,
            })
            .collect()
    }

    pub fn full_address(&self) -> String {
        self.property.location.address.formatted()
    }

    /// The property manager, else the first contact listed.
    ///
    /// Fails with a configuration error when the record lists no contacts.
    pub fn primary_contact(&self) -> Result<&Contact, CatalogError> {
        self.property.company.primary_contact()
    }

    pub fn owner_contact(&self) -> Option<&Contact> {
        self.property.company.owner_contact()
    }

    pub fn image(&self, id: &str) -> Option<&GalleryImage> {
        self.property.images.gallery.iter().find(|image| image.id == id)
    }

    pub fn gallery_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a GalleryImage> + 'a {
        self.property
            .images
            .gallery
            .iter()
            .filter(move |image| image.category.as_deref() == Some(category))
    }

    /// Distinct gallery categories in first-seen order.
    pub fn gallery_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for category in self
            .property
            .images
            .gallery
            .iter()
            .filter_map(|image| image.category.as_deref())
        {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Refund tier for a cancellation made `days_before_arrival` days out.
    ///
    /// Always `Some` for a loaded catalog: validation requires each schedule
    /// to end with a 0-day tier.
    pub fn cancellation_tier(
        &self,
        days_before_arrival: u32,
        period: BookingPeriod,
    ) -> Option<&CancellationTier> {
        self.property
            .booking_terms
            .cancellation
            .tier_for(days_before_arrival, period)
    }

    pub fn sleeping_arrangements_on(&self, level: u32) -> impl Iterator<Item = &BedConfiguration> {
        self.property.beds.iter().filter(move |bed| bed.level == level)
    }
}

fn warn_on_soft_anomalies(property: &Property) {
    let images = &property.images;
    for (field, id) in [("hero", &images.hero), ("og_image", &images.og_image)] {
        if !images.gallery.iter().any(|image| &image.id == id) {
            debug!(field, id = %id, "image is not part of the gallery");
        }
    }
    let links = [
        ("airbnb", property.links.airbnb.as_deref()),
        ("vrbo", property.links.vrbo.as_deref()),
    ];
    for (name, link) in links {
        if let Some(link) = link {
            if !link.starts_with("https://") {
                warn!(link = name, value = link, "listing link is not an https URL");
            }
        }
    }
    if property.company.contacts.is_empty() {
        warn!(
            identifier = %property.identifier,
            "property lists no contacts; primary contact lookups will fail"
        );
    }
}

fn validate_against_schema(property_path: &Path) -> Result<()> {
    let property_file = File::open(property_path)
        .with_context(|| format!("opening property {}", property_path.display()))?;
    let property_value: Value = serde_json::from_reader(BufReader::new(property_file))
        .with_context(|| format!("parsing property {}", property_path.display()))?;

    let declared_version = property_value
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let schema_path = resolve_property_schema_path(property_path);
    let schema = load_json_schema(
        &schema_path,
        SchemaLoadOptions {
            expected_version: Some(&declared_version),
            ..Default::default()
        },
    )
    .with_context(|| format!("loading property schema {}", schema_path.display()))?;
    debug!(
        schema = %schema_path.display(),
        version = %schema.schema_version,
        "validating property against schema"
    );

    if let Err(errors) = schema.compiled.validate(&property_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "property {} failed schema validation:\n{}",
            property_path.display(),
            details
        );
    }
    Ok(())
}

/// Prefer a `schema/` directory beside the record's `data/` directory.
fn resolve_property_schema_path(property_path: &Path) -> PathBuf {
    if let Some(base) = property_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join(SCHEMA_FILE);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SCHEMA_FILE)
}

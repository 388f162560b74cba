//! Holds one or more property catalogs for lookup by identifier.
//!
//! Registration is strict: a second record with an identifier already present
//! is refused, so two versions of one property never coexist or merge.

use crate::catalog::identity::PropertyId;
use crate::catalog::index::PropertyCatalog;
use crate::error::CatalogError;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
/// In-memory store for property catalogs keyed by `PropertyId`.
pub struct CatalogRepository {
    catalogs: BTreeMap<PropertyId, PropertyCatalog>,
}

impl CatalogRepository {
    /// Register a catalog for later lookup.
    pub fn register(&mut self, catalog: PropertyCatalog) -> Result<(), CatalogError> {
        let id = catalog.id().clone();
        if self.catalogs.contains_key(&id) {
            return Err(CatalogError::DuplicateIdentifier(id.0));
        }
        debug!(identifier = %id, "registered property catalog");
        self.catalogs.insert(id, catalog);
        Ok(())
    }

    /// Fetch a catalog by identifier, if present.
    pub fn get(&self, id: &PropertyId) -> Option<&PropertyCatalog> {
        self.catalogs.get(id)
    }

    /// Iterates catalogs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyCatalog> {
        self.catalogs.values()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

//! Process-wide `OpenAPI` schema registry of every DTO and enum.
//!
//! Built once on the first [`init`] call; later calls return the same registry.
//! Generic envelopes (`ApiResponse`, `PaginatedResponse`) are inlined by the route
//! documentation and are not registered.

use changelog_domain::access::{PermissionCheck, PermissionCheckRequest, RoleInfo, ScopeInfo};
use changelog_domain::auth::{AuthUser, User};
use changelog_domain::changelog::{
    ChangelogEntry, ChangelogStatus, CreateChangelogEntryRequest, UpdateChangelogEntryRequest,
};
use changelog_domain::product::{CreateProductRequest, Product, ProductRepository, UpdateProductRequest};
use changelog_domain::response::PageRequest;
use changelog_domain::role::Role;
use changelog_domain::scope::{ApiKeyScope, ScopeAction, ScopeResource};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::OnceLock;
use tracing::info;
use utoipa::openapi::schema::Schema;
use utoipa::openapi::{Components, OpenApi, RefOr};
use utoipa::{PartialSchema, ToSchema};

static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// Named component schemas, sorted by name.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, RefOr<Schema>>,
}

impl SchemaRegistry {
    fn collect() -> Self {
        let mut registry = Self { schemas: BTreeMap::new() };

        registry.add::<Role>();
        registry.add::<ApiKeyScope>();
        registry.add::<ScopeResource>();
        registry.add::<ScopeAction>();
        registry.add::<RoleInfo>();
        registry.add::<ScopeInfo>();
        registry.add::<PermissionCheckRequest>();
        registry.add::<PermissionCheck>();
        registry.add::<Product>();
        registry.add::<ProductRepository>();
        registry.add::<CreateProductRequest>();
        registry.add::<UpdateProductRequest>();
        registry.add::<ChangelogStatus>();
        registry.add::<ChangelogEntry>();
        registry.add::<CreateChangelogEntryRequest>();
        registry.add::<UpdateChangelogEntryRequest>();
        registry.add::<AuthUser>();
        registry.add::<User>();
        registry.add::<PageRequest>();

        registry
    }

    fn add<T: ToSchema>(&mut self) {
        let mut nested = Vec::new();
        T::schemas(&mut nested);

        let own = (T::name().into_owned(), <T as PartialSchema>::schema());
        for (name, schema) in std::iter::once(own).chain(nested) {
            self.schemas.entry(name).or_insert(schema);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }
}

/// Returns the registry, building it on first use.
pub fn init() -> &'static SchemaRegistry {
    REGISTRY.get_or_init(|| {
        let registry = SchemaRegistry::collect();
        info!(schemas = registry.len(), "Schema registry initialized");
        registry
    })
}

/// Adds every registered schema missing from `api`'s components and returns how many
/// were added. Existing entries are left untouched, so repeated calls add nothing.
pub fn register(api: &mut OpenApi) -> usize {
    let registry = init();
    let components = api.components.get_or_insert_with(Components::default);

    let mut added = 0;
    for (name, schema) in &registry.schemas {
        if let Entry::Vacant(slot) = components.schemas.entry(name.clone()) {
            slot.insert(schema.clone());
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_returns_the_same_registry() {
        assert!(std::ptr::eq(init(), init()));
    }

    #[test]
    fn registry_covers_models_and_enums() {
        let registry = init();
        for name in ["Role", "ApiKeyScope", "Product", "ChangelogEntry", "ChangelogStatus", "User"] {
            assert!(registry.contains(name), "missing schema {name}");
        }
    }
}

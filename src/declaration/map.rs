use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::declaration::rule::TenancyDeclaration;
use crate::error::FilterError;

/// Lookup boundary between the compiler and whoever owns the declarations.
///
/// The compiler never discovers declarations itself; it resolves them through
/// this trait. `None` means the resource type has no declaration at all, which
/// the compiler treats as an error rather than as "disabled".
pub trait DeclarationSource {
    /// Resolve the declaration for a resource-type identifier, if any.
    fn resolve(&self, resource_type: &str) -> Option<&TenancyDeclaration>;
}

/// Load-time arena of tenancy declarations keyed by resource-type identifier.
///
/// Populated once at startup (programmatically or from a JSON document) and
/// treated as immutable read-only data afterwards; wrap it in an [`Arc`] to
/// share it across units of work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationMap {
    declarations: HashMap<String, TenancyDeclaration>,
}

impl DeclarationMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration for a resource type, replacing any prior one.
    pub fn insert(&mut self, resource_type: impl Into<String>, declaration: TenancyDeclaration) {
        self.declarations.insert(resource_type.into(), declaration);
    }

    /// Load a `{ "ResourceType": { enabled, strategy, rules: [...] } }` document.
    ///
    /// Omitted fields take the legacy defaults: `enabled = true`,
    /// `strategy = AnyMatch`, `require_all_contexts = false`, `ignored = false`.
    pub fn load_from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of declared resource types.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// True when no resource type is declared.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl DeclarationSource for DeclarationMap {
    fn resolve(&self, resource_type: &str) -> Option<&TenancyDeclaration> {
        self.declarations.get(resource_type)
    }
}

impl<T: DeclarationSource + ?Sized> DeclarationSource for &T {
    fn resolve(&self, resource_type: &str) -> Option<&TenancyDeclaration> {
        (**self).resolve(resource_type)
    }
}

impl<T: DeclarationSource + ?Sized> DeclarationSource for Arc<T> {
    fn resolve(&self, resource_type: &str) -> Option<&TenancyDeclaration> {
        (**self).resolve(resource_type)
    }
}

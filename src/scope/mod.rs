/// Context providers and their registry.
pub mod context;
/// Value holders and their registry.
pub mod value;

use crate::error::FilterError;
use crate::scope::context::ContextRegistry;
use crate::scope::value::ValueRegistry;

/// Request-scoped carrier of the value and context registries.
///
/// One scope belongs to one logical unit of work (a request or session):
/// created at its start, populated by collaborators before the first compile
/// call, discarded at its end. A scope must never be shared mutably across
/// concurrent compile operations; concurrent units of work each own their own.
#[derive(Default)]
pub struct FilterScope {
    values: Option<ValueRegistry>,
    contexts: Option<ContextRegistry>,
}

impl FilterScope {
    /// Scope with neither registry attached yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope with both registries attached up front.
    pub fn with(values: ValueRegistry, contexts: ContextRegistry) -> Self {
        Self {
            values: Some(values),
            contexts: Some(contexts),
        }
    }

    /// Attach (or replace) the value registry for this scope.
    pub fn attach_values(&mut self, registry: ValueRegistry) {
        self.values = Some(registry);
    }

    /// Attach (or replace) the context registry for this scope.
    pub fn attach_contexts(&mut self, registry: ContextRegistry) {
        self.contexts = Some(registry);
    }

    /// The value registry, or `UnregisteredRegistry` if none was attached.
    pub fn values(&self) -> Result<&ValueRegistry, FilterError> {
        self.values
            .as_ref()
            .ok_or(FilterError::UnregisteredRegistry("value"))
    }

    /// The context registry, or `UnregisteredRegistry` if none was attached.
    pub fn contexts(&self) -> Result<&ContextRegistry, FilterError> {
        self.contexts
            .as_ref()
            .ok_or(FilterError::UnregisteredRegistry("context"))
    }
}

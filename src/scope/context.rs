use indexmap::IndexMap;

use crate::error::FilterError;

/// A named boolean condition gating whether a rule applies.
///
/// Evaluated lazily and possibly repeatedly within one compile call, so
/// implementations must be cheap and idempotent. The compiler treats them as
/// black-box predicates and applies no timeout of its own; an implementation
/// that performs I/O owns its own timeout policy.
pub trait ContextProvider {
    /// Identifier the provider registers under; matched against rule context tags.
    fn identifier(&self) -> &str;

    /// Whether the named condition currently holds.
    fn is_contextual(&self) -> bool;
}

/// Fixed identifier/outcome pair, handy for request setup code and fixtures.
#[derive(Debug, Clone)]
pub struct StaticContext {
    identifier: String,
    contextual: bool,
}

impl StaticContext {
    /// Provider that always reports the given outcome.
    pub fn new(identifier: impl Into<String>, contextual: bool) -> Self {
        Self {
            identifier: identifier.into(),
            contextual,
        }
    }
}

impl ContextProvider for StaticContext {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn is_contextual(&self) -> bool {
        self.contextual
    }
}

/// Insertion-ordered registry of context providers for one filter scope.
#[derive(Default)]
pub struct ContextRegistry {
    providers: IndexMap<String, Box<dyn ContextProvider>>,
}

impl ContextRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own identifier; last write wins.
    pub fn register(&mut self, provider: impl ContextProvider + 'static) {
        let identifier = provider.identifier().to_string();
        self.providers.insert(identifier, Box::new(provider));
    }

    /// Look up a provider by identifier.
    pub fn lookup(&self, identifier: &str) -> Result<&dyn ContextProvider, FilterError> {
        self.providers
            .get(identifier)
            .map(|provider| &**provider)
            .ok_or_else(|| FilterError::UnknownContextProvider(identifier.to_string()))
    }

    /// Iterate all providers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ContextProvider)> {
        self.providers
            .iter()
            .map(|(identifier, provider)| (identifier.as_str(), &**provider))
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

use indexmap::IndexMap;

use crate::error::FilterError;

/// A named runtime string value injectable into a rule template.
///
/// Registered once per unit of work by the owning request context and
/// read-only to the compiler.
pub trait ValueHolder {
    /// Identifier the holder registers under; matched against `{identifier}`
    /// placeholders in rule templates.
    fn identifier(&self) -> &str;

    /// Current value; `None` substitutes as the empty string.
    fn value(&self) -> Option<String>;
}

/// Fixed identifier/value pair, handy for request setup code and fixtures.
#[derive(Debug, Clone)]
pub struct StaticValue {
    identifier: String,
    value: Option<String>,
}

impl StaticValue {
    /// Holder carrying a concrete value.
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            value: Some(value.into()),
        }
    }

    /// Holder whose value is intentionally absent.
    pub fn absent(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            value: None,
        }
    }
}

impl ValueHolder for StaticValue {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn value(&self) -> Option<String> {
        self.value.clone()
    }
}

/// Insertion-ordered registry of value holders for one filter scope.
#[derive(Default)]
pub struct ValueRegistry {
    holders: IndexMap<String, Box<dyn ValueHolder>>,
}

impl ValueRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a holder under its own identifier; last write wins.
    pub fn register(&mut self, holder: impl ValueHolder + 'static) {
        let identifier = holder.identifier().to_string();
        self.holders.insert(identifier, Box::new(holder));
    }

    /// Look up a holder by identifier.
    pub fn lookup(&self, identifier: &str) -> Result<&dyn ValueHolder, FilterError> {
        self.holders
            .get(identifier)
            .map(|holder| &**holder)
            .ok_or_else(|| FilterError::UnknownValueHolder(identifier.to_string()))
    }

    /// Iterate all holders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ValueHolder)> {
        self.holders
            .iter()
            .map(|(identifier, holder)| (identifier.as_str(), &**holder))
    }

    /// Number of registered holders.
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// How the clauses of a declaration's contextual rules are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterStrategy {
    /// Stop at the first rule whose context applies; its clause is the predicate.
    FirstMatch,
    /// AND together the clauses of every rule whose context applies.
    #[default]
    AnyMatch,
}

/// A single templated isolation clause, gated by zero or more context tags.
///
/// The `where` template is an opaque SQL boolean expression carrying
/// `{identifier}` placeholders and the `$this` table-alias marker. It is never
/// parsed as SQL and never substituted unless the rule is contextual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRule {
    /// Context tags under which this rule applies; empty means "always applies".
    #[serde(default)]
    pub context: Vec<String>,
    /// When true every tag must be contextual; when false any one suffices.
    #[serde(default)]
    pub require_all_contexts: bool,
    /// Templated SQL boolean expression.
    #[serde(rename = "where")]
    pub where_clause: String,
    /// When true the rule contributes no predicate, regardless of context.
    #[serde(default)]
    pub ignored: bool,
}

impl FilterRule {
    /// Rule with the given template, no context tags, not ignored.
    pub fn new(where_clause: impl Into<String>) -> Self {
        Self {
            context: Vec::new(),
            require_all_contexts: false,
            where_clause: where_clause.into(),
            ignored: false,
        }
    }
}

/// One resource type's complete tenancy declaration.
///
/// Constructed once at load time and immutable thereafter; safe to share
/// read-only across units of work. Rule order is significant under
/// [`FilterStrategy::FirstMatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenancyDeclaration {
    /// Master switch; when false the compiled predicate is always empty.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Isolation rules in declaration order.
    #[serde(default)]
    pub rules: Vec<FilterRule>,
    /// Clause combination policy.
    #[serde(default)]
    pub strategy: FilterStrategy,
}

fn default_enabled() -> bool {
    true
}

impl TenancyDeclaration {
    /// Enabled declaration with the given strategy and rules.
    pub fn new(strategy: FilterStrategy, rules: Vec<FilterRule>) -> Self {
        Self {
            enabled: true,
            rules,
            strategy,
        }
    }

    /// Declaration for a resource type that explicitly opts out of filtering.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            rules: Vec::new(),
            strategy: FilterStrategy::default(),
        }
    }
}

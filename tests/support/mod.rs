#![allow(dead_code)]

use tenancy_filter::declaration::map::DeclarationMap;
use tenancy_filter::declaration::rule::{FilterRule, FilterStrategy, TenancyDeclaration};
use tenancy_filter::scope::context::{ContextRegistry, StaticContext};
use tenancy_filter::scope::value::{StaticValue, ValueRegistry};
use tenancy_filter::scope::FilterScope;

pub(crate) fn rule(where_clause: &str) -> FilterRule {
    FilterRule::new(where_clause)
}

pub(crate) fn tagged_rule(where_clause: &str, tags: &[&str]) -> FilterRule {
    FilterRule {
        context: tags.iter().map(ToString::to_string).collect(),
        ..FilterRule::new(where_clause)
    }
}

pub(crate) fn all_tags_rule(where_clause: &str, tags: &[&str]) -> FilterRule {
    FilterRule {
        require_all_contexts: true,
        ..tagged_rule(where_clause, tags)
    }
}

pub(crate) fn single_type_map(
    resource_type: &str,
    strategy: FilterStrategy,
    rules: Vec<FilterRule>,
) -> DeclarationMap {
    let mut map = DeclarationMap::new();
    map.insert(resource_type, TenancyDeclaration::new(strategy, rules));
    map
}

pub(crate) fn scope(values: &[(&str, &str)], contexts: &[(&str, bool)]) -> FilterScope {
    let mut value_registry = ValueRegistry::new();
    for (identifier, value) in values {
        value_registry.register(StaticValue::new(*identifier, *value));
    }

    let mut context_registry = ContextRegistry::new();
    for (identifier, contextual) in contexts {
        context_registry.register(StaticContext::new(*identifier, *contextual));
    }

    FilterScope::with(value_registry, context_registry)
}

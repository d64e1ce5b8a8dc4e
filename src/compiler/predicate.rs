use tracing::{debug, trace};

use crate::compiler::template;
use crate::declaration::map::DeclarationSource;
use crate::declaration::rule::{FilterRule, FilterStrategy};
use crate::error::FilterError;
use crate::scope::FilterScope;

/// Compiles tenant-isolation predicates from declared rules and scope state.
///
/// Holds only the (shared, immutable) declaration source; all per-request
/// state arrives through the [`FilterScope`] argument, so one compiler can
/// serve any number of units of work.
#[derive(Debug, Clone)]
pub struct PredicateCompiler<S> {
    declarations: S,
}

impl<S: DeclarationSource> PredicateCompiler<S> {
    /// Compiler over the given declaration source.
    pub fn new(declarations: S) -> Self {
        Self { declarations }
    }

    /// Compile the isolation predicate for a resource type and table alias.
    ///
    /// Returns a SQL boolean fragment to AND into the query's filter clause,
    /// or the empty string when the declaration is disabled or no rule's
    /// context applies to this request. An absent declaration is an error,
    /// not an implicit default: a newly added tenant-scoped type must opt in
    /// or out explicitly rather than query unfiltered.
    pub fn compile(
        &self,
        resource_type: &str,
        table_alias: &str,
        scope: &FilterScope,
    ) -> Result<String, FilterError> {
        let declaration = self
            .declarations
            .resolve(resource_type)
            .ok_or_else(|| FilterError::DeclarationMissing(resource_type.to_string()))?;

        if !declaration.enabled {
            debug!(resource_type, "tenancy filtering disabled for resource type");
            return Ok(String::new());
        }
        if declaration.rules.is_empty() {
            return Err(FilterError::NoRulesConfigured(resource_type.to_string()));
        }

        let mut clauses: Vec<String> = Vec::new();
        for (index, rule) in declaration.rules.iter().enumerate() {
            if rule.ignored {
                trace!(resource_type, index, "rule marked ignored, skipping");
                continue;
            }
            if !is_contextual(rule, scope)? {
                trace!(resource_type, index, "rule not contextual, skipping");
                continue;
            }

            let clause = template::substitute(
                &template::normalize(&rule.where_clause),
                table_alias,
                scope,
            )?;
            trace!(resource_type, index, clause = %clause, "rule matched");
            clauses.push(clause);

            // First match wins: later rules are never evaluated.
            if declaration.strategy == FilterStrategy::FirstMatch {
                break;
            }
        }

        let predicate = clauses.join(" AND ");
        debug!(resource_type, predicate = %predicate, "compiled tenancy predicate");
        Ok(predicate)
    }
}

/// Whether a rule's context gate passes for the current scope.
///
/// An empty tag set applies unconditionally. Otherwise every tag is looked up
/// and evaluated (no short-circuit), so a missing provider is reported
/// deterministically regardless of the outcome of earlier tags.
fn is_contextual(rule: &FilterRule, scope: &FilterScope) -> Result<bool, FilterError> {
    if rule.context.is_empty() {
        return Ok(true);
    }

    let contexts = scope.contexts()?;
    let mut matched = rule.require_all_contexts;
    for tag in &rule.context {
        let hit = contexts.lookup(tag)?.is_contextual();
        if rule.require_all_contexts {
            matched = matched && hit;
        } else {
            matched = matched || hit;
        }
    }
    Ok(matched)
}

//! Compile tenant-isolation predicates for shared-schema multi-tenant storage.
//!
//! Resource types declare *what* isolates them (templated SQL clauses, each
//! scoped to zero or more named contexts); this crate decides at query time
//! *which* of those clauses apply and substitutes the request's runtime values
//! into them, producing a SQL boolean fragment the query engine ANDs into its
//! `WHERE` clause. A resource type with no declaration fails the query outright
//! rather than running unfiltered.
#![warn(missing_docs)]

/// Predicate compilation: rule selection and template substitution.
pub mod compiler;
/// Immutable tenancy declarations: rules, strategies, and the load-time declaration map.
pub mod declaration;
/// Error taxonomy for declaration and compilation failures.
pub mod error;
/// Request-scoped state: value holders, context providers, and the filter scope.
pub mod scope;

/// Name under which hosts register and toggle the tenancy filter as a whole.
///
/// The on/off switch itself belongs to the caller: when the filter is disabled
/// under this name, `compile` is never invoked and no predicate is added.
pub const FILTER_NAME: &str = "multi-tenancy";

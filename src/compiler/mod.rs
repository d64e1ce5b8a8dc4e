/// The `PredicateCompiler` and its rule-selection loop.
pub mod predicate;
/// Template normalization and single-pass placeholder substitution.
pub mod template;

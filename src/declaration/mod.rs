/// Load-time declaration arena and the `DeclarationSource` lookup boundary.
pub mod map;
/// Filter rules, combination strategies, and per-type declarations.
pub mod rule;

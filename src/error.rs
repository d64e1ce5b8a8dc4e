use thiserror::Error;

/// Errors raised while resolving declarations or compiling a predicate.
///
/// Every variant indicates a configuration or programming defect, never a
/// transient condition, so none of them are retried or recovered internally.
/// Callers must fail the triggering query rather than run it unfiltered.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The resource type has no tenancy declaration at all.
    #[error("resource type `{0}` has no tenancy declaration; declare its rules or explicitly disable filtering for it")]
    DeclarationMissing(String),

    /// The declaration is enabled but supplies zero rules.
    #[error("resource type `{0}` is enabled for tenancy filtering but declares no rules")]
    NoRulesConfigured(String),

    /// A rule references a context tag with no registered evaluator.
    #[error("no context provider registered for `{0}`")]
    UnknownContextProvider(String),

    /// A template placeholder has no registered value in the current scope.
    #[error("no value holder registered for placeholder `{0}`")]
    UnknownValueHolder(String),

    /// The compiler was invoked before a required registry was attached to the scope.
    #[error("the {0} registry was not attached to the current filter scope")]
    UnregisteredRegistry(&'static str),

    /// The declaration document could not be parsed.
    #[error("invalid declaration document: {0}")]
    DeclarationFormat(#[from] serde_json::Error),
}

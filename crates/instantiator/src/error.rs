//! Errors raised while constructing an instance.
//!
//! Every variant is fatal for the call that produced it: the first failure
//! aborts the whole construction and is returned unchanged to the caller.

/// Error returned by the instantiator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstantiationError {
    /// Composite type without exactly one primary constructor.
    #[error(
        "cannot instantiate `{type_name}`: expected exactly one primary constructor, found {constructors}"
    )]
    UnsupportedConstruction {
        type_name: &'static str,
        constructors: usize,
    },

    /// No registered generator and no construction rule applies
    /// (primitive or abstract type without a factory, enum without variants).
    #[error("cannot resolve `{type_name}`: no registered generator and no construction rule applies")]
    UnresolvedType { type_name: &'static str },

    /// Nesting went deeper than the configured ceiling, usually a
    /// self-referential type.
    #[error("recursion limit of {limit} exceeded while constructing `{type_name}`")]
    RecursionLimitExceeded { type_name: &'static str, limit: usize },

    /// A constructor asked for an argument that was never supplied.
    #[error("constructor of `{type_name}` has no argument `{parameter}`")]
    MissingArgument {
        type_name: &'static str,
        parameter: String,
    },

    /// A constructor argument has a different type than requested.
    #[error("constructor of `{type_name}` expected argument `{parameter}` to be `{expected}`")]
    ArgumentMismatch {
        type_name: &'static str,
        parameter: String,
        expected: &'static str,
    },

    /// A descriptor produced an instance of another Rust type.
    #[error("instance produced for `{expected}` has a different type")]
    TypeMismatch { expected: &'static str },
}

impl InstantiationError {
    /// Name of the type the failure was raised for.
    pub fn type_name(&self) -> &'static str {
        match self {
            InstantiationError::UnsupportedConstruction { type_name, .. }
            | InstantiationError::UnresolvedType { type_name }
            | InstantiationError::RecursionLimitExceeded { type_name, .. }
            | InstantiationError::MissingArgument { type_name, .. }
            | InstantiationError::ArgumentMismatch { type_name, .. } => type_name,
            InstantiationError::TypeMismatch { expected } => expected,
        }
    }
}

pub type Result<T, E = InstantiationError> = std::result::Result<T, E>;

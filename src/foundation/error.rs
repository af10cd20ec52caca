use std::fmt;

/// Convenience result type used across avscript.
pub type AvsResult<T> = Result<T, AvsError>;

/// Constraint a value failed to satisfy inside the modifier chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeMismatchKind {
    /// `b`: value must be a boolean.
    Boolean,
    /// `d`: value must be a finite number.
    Number,
    /// `i`: value must be an integral number.
    Integer,
    /// `t`: value must be one of the listed type names.
    AllowedValue(Vec<String>),
    /// `v`: value must be a bare identifier.
    Variable,
    /// `c`: value must be a color integer, color name or hex color.
    Color,
    /// `f`/`p`: value must be text.
    Text,
}

impl fmt::Display for TypeMismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("a boolean"),
            Self::Number => f.write_str("a finite number"),
            Self::Integer => f.write_str("an integer"),
            Self::AllowedValue(allowed) => write!(f, "one of [{}]", allowed.join(", ")),
            Self::Variable => f.write_str("a bare identifier"),
            Self::Color => f.write_str("a color (integer, name or hex)"),
            Self::Text => f.write_str("a string"),
        }
    }
}

/// Top-level error taxonomy used by signature compilation, call binding and the registry.
#[derive(thiserror::Error, Debug)]
pub enum AvsError {
    /// More actual arguments than the signature's definitions can absorb.
    #[error("{call}: too many arguments ({given} given, at most {accepted} accepted)")]
    SignatureTooManyArguments {
        /// Function being called.
        call: String,
        /// Number of arguments supplied.
        given: usize,
        /// Number of parameter definitions.
        accepted: usize,
    },

    /// An unnamed argument follows a gap left by an omitted parameter.
    #[error("{call}: unnamed argument at position {position} follows an omitted argument")]
    SignatureAmbiguousPosition {
        /// Function being called.
        call: String,
        /// Zero-based argument index.
        position: usize,
    },

    /// A required (`r`) parameter was omitted.
    #[error("{call}: required argument {} is missing", describe_param(.position, .identifier))]
    SignatureMissingRequired {
        /// Function being called.
        call: String,
        /// Zero-based parameter index.
        position: usize,
        /// Parameter identifier, if it has one.
        identifier: Option<String>,
    },

    /// A forced-file (`f`) parameter was omitted.
    #[error("{call}: filename is required (argument {})", describe_param(.position, .identifier))]
    SignatureMissingFilename {
        /// Function being called.
        call: String,
        /// Zero-based parameter index.
        position: usize,
        /// Parameter identifier, if it has one.
        identifier: Option<String>,
    },

    /// A value failed its modifier's check or coercion.
    #[error("type mismatch: expected {kind}, got {value} (modifier '{modifier}')")]
    TypeMismatch {
        /// Violated constraint.
        kind: TypeMismatchKind,
        /// Offending value, rendered for display.
        value: String,
        /// Modifier string of the parameter.
        modifier: String,
    },

    /// A string was supplied where `n` forbids a path.
    #[error("only one path supported, got string {value} (modifier '{modifier}')")]
    PathAmbiguity {
        /// Offending value.
        value: String,
        /// Modifier string of the parameter.
        modifier: String,
    },

    /// A function with the same lower-cased name is already registered.
    #[error("function '{0}' is already registered")]
    RegistryDuplicateName(String),

    /// The name collides with a member reserved by the script layer.
    #[error("function name '{0}' is reserved")]
    RegistryReservedName(String),

    /// The script asked for a function the registry does not know.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// Invalid user-provided registration or argument data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvsError {
    /// Build a [`AvsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AvsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`AvsError::TypeMismatch`] value.
    pub fn type_mismatch(
        kind: TypeMismatchKind,
        value: impl Into<String>,
        modifier: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            kind,
            value: value.into(),
            modifier: modifier.into(),
        }
    }
}

fn describe_param(position: &usize, identifier: &Option<String>) -> String {
    match identifier {
        Some(id) => format!("'{id}' (position {position})"),
        None => format!("at position {position}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

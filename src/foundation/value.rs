use std::fmt;

use crate::foundation::error::{AvsError, AvsResult};

/// One call-site argument, tagged at the call boundary.
///
/// The modifier chain dispatches on the tag; [`Arg::Unset`] marks an omitted position.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Arg {
    /// Omitted argument; the parameter is skipped in the output.
    #[default]
    Unset,
    /// Boolean literal.
    Bool(bool),
    /// Numeric literal (integers are carried as whole `f64` values).
    Number(f64),
    /// Text; rendered raw, quoted or validated depending on the modifier.
    Text(String),
}

/// Runtime shape of an [`Arg`], used for homogeneous-run matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// [`Arg::Unset`].
    Unset,
    /// [`Arg::Bool`].
    Bool,
    /// [`Arg::Number`].
    Number,
    /// [`Arg::Text`].
    Text,
}

impl Arg {
    /// Runtime shape of this argument.
    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Unset => ArgKind::Unset,
            Self::Bool(_) => ArgKind::Bool,
            Self::Number(_) => ArgKind::Number,
            Self::Text(_) => ArgKind::Text,
        }
    }

    /// Whether this position was omitted.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// `false`, `0` and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Unset => true,
            Self::Bool(b) => !b,
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Borrow the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Serialize as a target-language literal (text is emitted raw).
    pub fn to_literal(&self) -> String {
        match self {
            Self::Unset => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("<unset>"),
            Self::Text(s) => write!(f, "{s:?}"),
            other => f.write_str(&other.to_literal()),
        }
    }
}

pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u32> for Arg {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Unset, Into::into)
    }
}

impl TryFrom<&serde_json::Value> for Arg {
    type Error = AvsError;

    fn try_from(v: &serde_json::Value) -> AvsResult<Self> {
        match v {
            serde_json::Value::Null => Ok(Self::Unset),
            serde_json::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| AvsError::validation(format!("argument {n} is not representable"))),
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(
                AvsError::validation(format!("argument {v} must be a scalar or null")),
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/value.rs"]
mod tests;

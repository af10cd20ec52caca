use std::fmt;

use crate::signature::modifier::{Modifier, Modifiers, ParameterKind};

/// One positional parameter of a signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDefinition {
    /// Parsed modifier flags.
    pub modifiers: Modifiers,
    /// Output name; `None` emits the value positionally.
    pub identifier: Option<String>,
}

impl ParameterDefinition {
    /// Parse one signature token such as `"ri:width"`, `"b:"` or `"clip"`.
    ///
    /// Text before the last unescaped colon is the modifier, text after it the identifier.
    /// A token without a colon is an unnamed, unmodified parameter.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        let (modifier, identifier) = match last_unescaped_colon(token) {
            Some(idx) => (&token[..idx], &token[idx + 1..]),
            None => ("", token),
        };
        let identifier = identifier.trim().replace("\\:", ":");
        Self {
            modifiers: Modifiers::parse(modifier.trim()),
            identifier: (!identifier.is_empty()).then_some(identifier),
        }
    }

    /// Shorthand for `self.modifiers.has(m)`.
    pub fn has(&self, m: Modifier) -> bool {
        self.modifiers.has(m)
    }

    /// Matching strategy of this parameter.
    pub fn kind(&self) -> ParameterKind {
        self.modifiers.kind()
    }
}

impl fmt::Display for ParameterDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self
            .identifier
            .as_deref()
            .map(|s| s.replace(':', "\\:"))
            .unwrap_or_default();
        if self.modifiers.as_str().is_empty() && !id.is_empty() {
            f.write_str(&id)
        } else {
            write!(f, "{}:{id}", self.modifiers)
        }
    }
}

fn last_unescaped_colon(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    (0..bytes.len())
        .rev()
        .find(|&i| bytes[i] == b':' && (i == 0 || bytes[i - 1] != b'\\'))
}

/// A comma-separated list given either as one string or as separate items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommaList {
    /// `"a, b, c"`.
    Text(String),
    /// `["a", "b", "c"]`.
    Items(Vec<String>),
}

impl CommaList {
    /// Trimmed entries. An empty or blank string yields no entries.
    pub fn entries(&self) -> Vec<String> {
        match self {
            Self::Text(s) if s.trim().is_empty() => Vec::new(),
            Self::Text(s) => s.split(',').map(|t| t.trim().to_string()).collect(),
            Self::Items(items) => items.iter().map(|t| t.trim().to_string()).collect(),
        }
    }
}

impl Default for CommaList {
    fn default() -> Self {
        Self::Items(Vec::new())
    }
}

impl From<&str> for CommaList {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for CommaList {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<String>> for CommaList {
    fn from(v: Vec<String>) -> Self {
        Self::Items(v)
    }
}

impl From<&[&str]> for CommaList {
    fn from(v: &[&str]) -> Self {
        Self::Items(v.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommaList {
    fn from(v: [&str; N]) -> Self {
        Self::Items(v.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Compiled description of a callable's parameters. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    name: String,
    params: Vec<ParameterDefinition>,
    allowed_types: Vec<String>,
}

impl Signature {
    /// Compile the combined form `Name(tok1, tok2, ...)`.
    ///
    /// The name is everything before the first `(`; the body runs to the last `)`.
    /// Compilation never fails: malformed tokens become permissive parameters.
    pub fn compile(text: &str) -> Self {
        let text = text.trim();
        let (name, body) = match text.find('(') {
            Some(open) => {
                let rest = &text[open + 1..];
                let body = rest.rfind(')').map_or(rest, |close| &rest[..close]);
                (&text[..open], body)
            }
            None => (text, ""),
        };
        Self::from_parts(name, body, CommaList::default())
    }

    /// Compile the combined form and attach an allowed-type list for `t` parameters.
    pub fn compile_with_types(text: &str, types: impl Into<CommaList>) -> Self {
        let mut sig = Self::compile(text);
        sig.allowed_types = non_empty(types.into().entries());
        sig
    }

    /// Build from a bare name, a parameter list and an allowed-type list.
    pub fn from_parts(
        name: &str,
        params: impl Into<CommaList>,
        types: impl Into<CommaList>,
    ) -> Self {
        let params = params
            .into()
            .entries()
            .iter()
            .map(|t| ParameterDefinition::parse(t))
            .collect();
        Self {
            name: name.trim().to_string(),
            params,
            allowed_types: non_empty(types.into().entries()),
        }
    }

    /// Function name as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter definitions in call order.
    pub fn params(&self) -> &[ParameterDefinition] {
        &self.params
    }

    /// Exact-match values accepted by `t` parameters.
    pub fn allowed_types(&self) -> &[String] {
        &self.allowed_types
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
        write!(f, "{}({})", self.name, params.join(", "))
    }
}

fn non_empty(entries: Vec<String>) -> Vec<String> {
    entries.into_iter().filter(|e| !e.is_empty()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/signature/compile.rs"]
mod tests;

use std::fmt;

/// One letter of the modifier alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Modifier {
    /// `q`: quote as a plain string.
    Quote = 1 << 0,
    /// `p`: resolve as a path and quote.
    Path = 1 << 1,
    /// `r`: required.
    Required = 1 << 2,
    /// `f`: required filename; resolve as a path and quote.
    File = 1 << 3,
    /// `n`: reject strings (not a path).
    NotPath = 1 << 4,
    /// `t`: must be one of the signature's allowed types.
    Type = 1 << 5,
    /// `b`: boolean.
    Bool = 1 << 6,
    /// `d`: number.
    Number = 1 << 7,
    /// `i`: integer.
    Integer = 1 << 8,
    /// `v`: bare identifier.
    Variable = 1 << 9,
    /// `c`: color.
    Color = 1 << 10,
    /// `e`: escape into a triple-quoted string.
    Escape = 1 << 11,
    /// `a`: infer the rendering from the runtime value.
    Auto = 1 << 12,
    /// `m`: absorb several arguments.
    Multi = 1 << 13,
}

impl Modifier {
    /// Every modifier, in alphabet order.
    pub const ALL: [Modifier; 14] = [
        Modifier::Quote,
        Modifier::Path,
        Modifier::Required,
        Modifier::File,
        Modifier::NotPath,
        Modifier::Type,
        Modifier::Bool,
        Modifier::Number,
        Modifier::Integer,
        Modifier::Variable,
        Modifier::Color,
        Modifier::Escape,
        Modifier::Auto,
        Modifier::Multi,
    ];

    /// Map a signature letter to its modifier. Unknown letters map to `None`.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'q' => Self::Quote,
            'p' => Self::Path,
            'r' => Self::Required,
            'f' => Self::File,
            'n' => Self::NotPath,
            't' => Self::Type,
            'b' => Self::Bool,
            'd' => Self::Number,
            'i' => Self::Integer,
            'v' => Self::Variable,
            'c' => Self::Color,
            'e' => Self::Escape,
            'a' => Self::Auto,
            'm' => Self::Multi,
            _ => return None,
        })
    }

    /// Signature letter of this modifier.
    pub fn as_char(self) -> char {
        match self {
            Self::Quote => 'q',
            Self::Path => 'p',
            Self::Required => 'r',
            Self::File => 'f',
            Self::NotPath => 'n',
            Self::Type => 't',
            Self::Bool => 'b',
            Self::Number => 'd',
            Self::Integer => 'i',
            Self::Variable => 'v',
            Self::Color => 'c',
            Self::Escape => 'e',
            Self::Auto => 'a',
            Self::Multi => 'm',
        }
    }

    fn bit(self) -> u16 {
        self as u16
    }
}

/// Set of modifiers parsed once from a modifier string.
///
/// Letters outside the alphabet are ignored; the original text is kept for error messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    bits: u16,
    source: String,
}

impl Modifiers {
    /// Parse a modifier string such as `"rmi"`.
    pub fn parse(text: &str) -> Self {
        let bits = text
            .chars()
            .filter_map(Modifier::from_char)
            .fold(0u16, |acc, m| acc | m.bit());
        Self {
            bits,
            source: text.to_string(),
        }
    }

    /// Whether `m` is set.
    pub fn has(&self, m: Modifier) -> bool {
        self.bits & m.bit() != 0
    }

    /// Whether any of `ms` is set.
    pub fn has_any(&self, ms: &[Modifier]) -> bool {
        ms.iter().any(|m| self.has(*m))
    }

    /// The modifier text exactly as written in the signature.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Matching strategy implied by `m` and `a`.
    pub fn kind(&self) -> ParameterKind {
        match (self.has(Modifier::Multi), self.has(Modifier::Auto)) {
            (false, _) => ParameterKind::Single,
            (true, false) => ParameterKind::MultiHomogeneous,
            (true, true) => ParameterKind::MultiAuto,
        }
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// How a parameter definition consumes call-site arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterKind {
    /// Exactly one argument.
    Single,
    /// A run of arguments sharing the runtime kind of the first.
    MultiHomogeneous,
    /// Every remaining argument.
    MultiAuto,
}

#[cfg(test)]
#[path = "../../tests/unit/signature/modifier.rs"]
mod tests;

use crate::{
    foundation::{
        error::{AvsError, AvsResult, TypeMismatchKind},
        path::PathResolver,
        value::Arg,
    },
    modifier::{
        color::parse_color,
        escape::{escape, is_identifier, quote},
    },
    signature::modifier::{Modifier, Modifiers},
};

/// Read-only options shared by every parameter of one call.
#[derive(Clone, Copy, Debug)]
pub struct ProcessOptions<'a> {
    /// Values accepted by `t` parameters.
    pub allowed_types: &'a [String],
    /// Resolver for `f` and `p` parameters.
    pub paths: &'a PathResolver,
}

/// Working value of one (modifier, value) pair as it moves through the chain.
#[derive(Clone, Debug, PartialEq)]
enum Working {
    /// Still a tagged argument; later steps may check or coerce it.
    Value(Arg),
    /// Already serialized text (quoted, escaped or a color literal).
    Rendered(String),
}

impl Working {
    fn display(&self) -> String {
        match self {
            Self::Value(arg) => arg.to_string(),
            Self::Rendered(s) => s.clone(),
        }
    }

    fn into_fragment(self) -> String {
        match self {
            Self::Value(arg) => arg.to_literal(),
            Self::Rendered(s) => s,
        }
    }
}

struct ProcessingContext<'a> {
    modifiers: &'a Modifiers,
    options: ProcessOptions<'a>,
    value: Working,
}

/// Apply the modifier chain to one value and return its serialized fragment.
///
/// Steps run in a fixed order, each only when its letter is present: `t`, `f`/`p`,
/// `e` or quoting, `n`, `b`, `d`, `i`, `c`, `v`, `a`. With `a` set the type, path and
/// quoting steps are deferred to the auto-type step, which picks them by runtime tag.
pub fn process(
    modifiers: &Modifiers,
    value: Arg,
    options: ProcessOptions<'_>,
) -> AvsResult<String> {
    let mut ctx = ProcessingContext {
        modifiers,
        options,
        value: Working::Value(value),
    };
    let auto = modifiers.has(Modifier::Auto);

    if !auto {
        if modifiers.has(Modifier::Type) {
            ctx.check_allowed_type()?;
        }
        if modifiers.has_any(&[Modifier::File, Modifier::Path]) {
            ctx.resolve_path()?;
        }
        if modifiers.has(Modifier::Escape) {
            ctx.escape();
        } else if modifiers.has_any(&[
            Modifier::File,
            Modifier::Path,
            Modifier::Quote,
            Modifier::Type,
        ]) {
            ctx.quote();
        }
    }
    if modifiers.has(Modifier::NotPath) {
        ctx.reject_string()?;
    }
    if modifiers.has(Modifier::Bool) {
        ctx.require_bool()?;
    }
    if modifiers.has(Modifier::Number) {
        ctx.require_number()?;
    }
    if modifiers.has(Modifier::Integer) {
        ctx.require_integer()?;
    }
    if modifiers.has(Modifier::Color) {
        ctx.color()?;
    }
    if modifiers.has(Modifier::Variable) {
        ctx.require_identifier()?;
    }
    if auto {
        ctx.auto_type()?;
    }

    Ok(ctx.value.into_fragment())
}

impl ProcessingContext<'_> {
    fn mismatch(&self, kind: TypeMismatchKind) -> AvsError {
        AvsError::type_mismatch(kind, self.value.display(), self.modifiers.as_str())
    }

    fn allowed_type_error(&self) -> AvsError {
        self.mismatch(TypeMismatchKind::AllowedValue(
            self.options.allowed_types.to_vec(),
        ))
    }

    fn is_allowed_type(&self, s: &str) -> bool {
        self.options.allowed_types.iter().any(|t| t == s)
    }

    fn check_allowed_type(&self) -> AvsResult<()> {
        let Working::Value(arg) = &self.value else {
            return Ok(());
        };
        if arg.is_falsy() {
            return Ok(());
        }
        match arg.as_text() {
            Some(s) if self.is_allowed_type(s) => Ok(()),
            _ => Err(self.allowed_type_error()),
        }
    }

    fn resolve_path(&mut self) -> AvsResult<()> {
        let resolved = match &self.value {
            Working::Value(Arg::Text(s)) => self.options.paths.resolve(s),
            _ => return Err(self.mismatch(TypeMismatchKind::Text)),
        };
        self.value = Working::Value(Arg::Text(resolved));
        Ok(())
    }

    fn escape(&mut self) {
        if let Working::Value(arg) = &self.value {
            self.value = Working::Rendered(escape(&arg.to_literal()));
        }
    }

    fn quote(&mut self) {
        if let Working::Value(arg) = &self.value {
            self.value = Working::Rendered(quote(&arg.to_literal()));
        }
    }

    fn reject_string(&self) -> AvsResult<()> {
        match &self.value {
            Working::Value(Arg::Text(_)) | Working::Rendered(_) => Err(AvsError::PathAmbiguity {
                value: self.value.display(),
                modifier: self.modifiers.as_str().to_string(),
            }),
            Working::Value(_) => Ok(()),
        }
    }

    fn require_bool(&self) -> AvsResult<()> {
        match &self.value {
            Working::Value(Arg::Bool(_)) => Ok(()),
            _ => Err(self.mismatch(TypeMismatchKind::Boolean)),
        }
    }

    fn require_number(&self) -> AvsResult<()> {
        match &self.value {
            Working::Value(Arg::Number(n)) if n.is_finite() => Ok(()),
            _ => Err(self.mismatch(TypeMismatchKind::Number)),
        }
    }

    fn require_integer(&self) -> AvsResult<()> {
        match &self.value {
            Working::Value(Arg::Number(n)) if n.is_finite() && n.fract() == 0.0 => Ok(()),
            _ => Err(self.mismatch(TypeMismatchKind::Integer)),
        }
    }

    fn color(&mut self) -> AvsResult<()> {
        let arg = match &self.value {
            Working::Value(arg) => arg.clone(),
            Working::Rendered(s) => Arg::Text(s.clone()),
        };
        let literal = parse_color(&arg).map_err(|_| self.mismatch(TypeMismatchKind::Color))?;
        self.value = Working::Rendered(literal);
        Ok(())
    }

    fn require_identifier(&self) -> AvsResult<()> {
        match &self.value {
            Working::Value(Arg::Text(s)) if is_identifier(s) => Ok(()),
            _ => Err(self.mismatch(TypeMismatchKind::Variable)),
        }
    }

    fn auto_type(&mut self) -> AvsResult<()> {
        let text = match &self.value {
            Working::Value(Arg::Text(s)) => s.clone(),
            // numbers and booleans serialize natively; rendered values are final
            _ => return Ok(()),
        };
        let m = self.modifiers;

        if m.has(Modifier::Type) {
            if text.is_empty() || self.is_allowed_type(&text) {
                self.value = Working::Rendered(quote(&text));
            } else if !is_identifier(&text) {
                return Err(self.allowed_type_error());
            }
            return Ok(());
        }
        if m.has_any(&[Modifier::Path, Modifier::File]) {
            self.value = Working::Rendered(quote(&self.options.paths.resolve(&text)));
            return Ok(());
        }
        if m.has(Modifier::Escape) {
            self.value = Working::Rendered(escape(&text));
            return Ok(());
        }
        if m.has(Modifier::Quote) {
            self.value = Working::Rendered(quote(&text));
            return Ok(());
        }
        if !is_identifier(&text) {
            return Err(self.mismatch(TypeMismatchKind::Variable));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modifier/process.rs"]
mod tests;

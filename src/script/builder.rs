use std::collections::BTreeSet;

use crate::{
    foundation::{
        error::{AvsError, AvsResult},
        value::Arg,
    },
    registry::plugins::Registry,
};

/// Accumulates script lines generated through a [`Registry`].
///
/// Each plugin's `LoadPlugin`/`Import` directive is emitted once, before its first call.
/// Every inserted line starts on a fresh line and ends with a newline.
#[derive(Debug)]
pub struct Script<'r> {
    registry: &'r Registry,
    code: String,
    loaded: BTreeSet<String>,
}

impl<'r> Script<'r> {
    /// Empty script over `registry`.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            code: String::new(),
            loaded: BTreeSet::new(),
        }
    }

    /// Evaluate `name` with `args` and append the generated line.
    pub fn call(&mut self, name: &str, args: &[Arg]) -> AvsResult<&mut Self> {
        let registry = self.registry;
        let entry = registry
            .lookup(name)
            .ok_or_else(|| AvsError::UnknownFunction(name.to_string()))?;
        let Some(line) = registry.invoke(name, args)? else {
            tracing::debug!(name, "call produced no output");
            return Ok(self);
        };

        if let Some(directive) = entry.source.directive(registry.paths()) {
            if self.loaded.insert(directive.clone()) {
                tracing::debug!(%directive, "emitting plugin directive");
                self.push_line(&directive);
            }
        }
        self.push_line(&line);
        Ok(self)
    }

    /// Append a literal line.
    pub fn raw(&mut self, line: &str) -> &mut Self {
        self.push_line(line);
        self
    }

    /// Generated text so far.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Consume the script and return its text.
    pub fn into_code(self) -> String {
        self.code
    }

    fn push_line(&mut self, line: &str) {
        if !self.code.is_empty() && !self.code.ends_with('\n') {
            self.code.push('\n');
        }
        self.code.push_str(line);
        if !line.ends_with('\n') {
            self.code.push('\n');
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/builder.rs"]
mod tests;

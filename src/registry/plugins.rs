use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    foundation::{
        error::{AvsError, AvsResult},
        path::PathResolver,
        value::Arg,
    },
    modifier::escape::{is_identifier, quote},
    registry::builtin::CORE_FUNCTIONS,
    signature::{
        binder::CallBinder,
        compile::{CommaList, Signature},
    },
};

/// Lower-cased names the script layer keeps for itself.
pub const RESERVED_NAMES: &[&str] = &["import", "loadplugin", "raw", "code", "call"];

/// Custom call implementation. `Ok(None)` means the call emits nothing.
pub type CustomCall = Arc<dyn Fn(&[Arg]) -> AvsResult<Option<String>> + Send + Sync>;

/// Where a function comes from, and which directive makes it available to the script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PluginSource {
    /// Built into the host; no directive.
    #[default]
    BuiltIn,
    /// Native plugin loaded with `LoadPlugin("...")`.
    Plugin(PathBuf),
    /// Script library pulled in with `Import("...")`.
    Script(PathBuf),
}

impl PluginSource {
    /// Directive line to emit before the first call, with the path resolved.
    pub fn directive(&self, paths: &PathResolver) -> Option<String> {
        let (func, path) = match self {
            Self::BuiltIn => return None,
            Self::Plugin(p) => ("LoadPlugin", p),
            Self::Script(p) => ("Import", p),
        };
        Some(format!("{func}({})", quote(&resolve(paths, path))))
    }
}

fn resolve(paths: &PathResolver, path: &Path) -> String {
    paths.resolve(&path.to_string_lossy())
}

/// How a registered function turns arguments into a line of script.
#[derive(Clone)]
pub enum PluginCall {
    /// Compiled signature.
    Signature(CallBinder),
    /// Hand-written implementation.
    Custom(CustomCall),
}

impl fmt::Debug for PluginCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signature(b) => f.debug_tuple("Signature").field(b.signature()).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A function ready to be registered.
#[derive(Clone, Debug)]
pub struct PluginDef {
    /// Name as written by the author; the registry key is its lower-cased form.
    pub name: String,
    /// Directive source.
    pub source: PluginSource,
    /// Call implementation.
    pub call: PluginCall,
}

impl PluginDef {
    /// Definition backed by a compiled signature.
    pub fn from_signature(signature: Signature, source: PluginSource) -> Self {
        Self {
            name: signature.name().to_string(),
            source,
            call: PluginCall::Signature(CallBinder::new(signature)),
        }
    }
}

/// A registered function.
#[derive(Clone, Debug)]
pub struct RegistryEntry {
    /// Name as registered.
    pub name: String,
    /// Directive source.
    pub source: PluginSource,
    /// Call implementation.
    pub call: PluginCall,
}

impl RegistryEntry {
    /// Compiled signature, when the entry has one.
    pub fn signature(&self) -> Option<&Signature> {
        match &self.call {
            PluginCall::Signature(b) => Some(b.signature()),
            PluginCall::Custom(_) => None,
        }
    }
}

/// Functions available to scripts, keyed by lower-cased name.
///
/// Entries are inserted once and never replaced; re-registering a name is an error.
#[derive(Debug)]
pub struct Registry {
    paths: PathResolver,
    entries: BTreeMap<String, RegistryEntry>,
    aliases: BTreeMap<String, String>,
}

impl Registry {
    /// Empty registry.
    pub fn new(paths: PathResolver) -> Self {
        Self {
            paths,
            entries: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Registry pre-populated with the built-in filter table.
    pub fn with_core(paths: PathResolver) -> AvsResult<Self> {
        let mut registry = Self::new(paths);
        for (signature, types) in CORE_FUNCTIONS {
            registry.register_signature(signature, *types, PluginSource::BuiltIn)?;
        }
        Ok(registry)
    }

    /// Resolver used for `f`/`p` parameters and plugin directives.
    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    /// Insert `def`, generating its casing aliases.
    #[tracing::instrument(level = "debug", skip(self, def), fields(name = %def.name))]
    pub fn register(&mut self, def: PluginDef) -> AvsResult<()> {
        let name = def.name.trim().to_string();
        if !is_identifier(&name) {
            return Err(AvsError::validation(format!(
                "function name '{name}' is not a valid identifier"
            )));
        }
        let key = name.to_ascii_lowercase();
        if RESERVED_NAMES.contains(&key.as_str()) {
            return Err(AvsError::RegistryReservedName(name));
        }
        if self.entries.contains_key(&key) {
            return Err(AvsError::RegistryDuplicateName(name));
        }

        for alias in casing_aliases(&name) {
            self.aliases.entry(alias).or_insert_with(|| key.clone());
        }
        tracing::debug!(key = %key, source = ?def.source, "registered function");
        self.entries.insert(
            key,
            RegistryEntry {
                name,
                source: def.source,
                call: def.call,
            },
        );
        Ok(())
    }

    /// Compile `signature` and register it.
    pub fn register_signature(
        &mut self,
        signature: &str,
        types: impl Into<CommaList>,
        source: PluginSource,
    ) -> AvsResult<()> {
        let sig = Signature::compile_with_types(signature, types);
        self.register(PluginDef::from_signature(sig, source))
    }

    /// Register a hand-written call implementation.
    pub fn register_fn<F>(
        &mut self,
        name: impl Into<String>,
        source: PluginSource,
        f: F,
    ) -> AvsResult<()>
    where
        F: Fn(&[Arg]) -> AvsResult<Option<String>> + Send + Sync + 'static,
    {
        self.register(PluginDef {
            name: name.into(),
            source,
            call: PluginCall::Custom(Arc::new(f)),
        })
    }

    /// Find an entry by exact alias, falling back to its lower-cased name.
    pub fn lookup(&self, name: &str) -> Option<&RegistryEntry> {
        let key = self
            .aliases
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_ascii_lowercase());
        self.entries.get(&key)
    }

    /// Aliases that resolve to `name`'s entry, sorted.
    pub fn aliases(&self, name: &str) -> Vec<&str> {
        let key = name.to_ascii_lowercase();
        self.aliases
            .iter()
            .filter(|(_, k)| **k == key)
            .map(|(alias, _)| alias.as_str())
            .collect()
    }

    /// Registered names in sorted key order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name.as_str())
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluate `name` with `args`. `Ok(None)` means the call emits nothing.
    pub fn invoke(&self, name: &str, args: &[Arg]) -> AvsResult<Option<String>> {
        let entry = self
            .lookup(name)
            .ok_or_else(|| AvsError::UnknownFunction(name.to_string()))?;
        match &entry.call {
            PluginCall::Signature(binder) => binder.bind(args, &self.paths).map(Some),
            PluginCall::Custom(f) => f(args),
        }
    }
}

/// Original, lower-case, upper-case and lower-camel spellings of `name`.
fn casing_aliases(name: &str) -> Vec<String> {
    let mut chars = name.chars();
    let lower_camel = match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    let mut out = vec![
        name.to_string(),
        name.to_ascii_lowercase(),
        name.to_ascii_uppercase(),
        lower_camel,
    ];
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
#[path = "../../tests/unit/registry/plugins.rs"]
mod tests;

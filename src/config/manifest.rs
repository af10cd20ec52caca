use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{
        error::{AvsError, AvsResult},
        path::PathResolver,
        value::Arg,
    },
    registry::plugins::{PluginDef, PluginSource, Registry},
    script::builder::Script,
    signature::compile::{CommaList, Signature},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A set of plugin signatures plus a script built from them.
///
/// Manifests are plain JSON; see [`Manifest::from_json_str`].
pub struct Manifest {
    /// Directory relative paths resolve against. Defaults to the working directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Pre-register the built-in filter table.
    #[serde(default = "default_core")]
    pub core: bool,
    /// Functions to register, in order.
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
    /// Script steps, in order.
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

fn default_core() -> bool {
    true
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One function definition.
///
/// Either `signature` holds the combined `Name(tok, ...)` form, or `name` and `params`
/// give the parts separately.
pub struct PluginSpec {
    /// Combined signature text.
    #[serde(default)]
    pub signature: Option<String>,
    /// Bare function name, used with `params`.
    #[serde(default)]
    pub name: Option<String>,
    /// Parameter tokens.
    #[serde(default)]
    pub params: Option<ListSpec>,
    /// Values accepted by `t` parameters.
    #[serde(default)]
    pub types: Option<ListSpec>,
    /// Directive source; omitted means built-in.
    #[serde(default)]
    pub source: Option<SourceSpec>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(untagged)]
/// A comma-separated string or an array of strings.
pub enum ListSpec {
    /// `"a, b"`.
    Text(String),
    /// `["a", "b"]`.
    Items(Vec<String>),
}

impl From<ListSpec> for CommaList {
    fn from(v: ListSpec) -> Self {
        match v {
            ListSpec::Text(s) => CommaList::Text(s),
            ListSpec::Items(items) => CommaList::Items(items),
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Kind of directive a plugin needs.
pub enum SourceKind {
    /// `LoadPlugin`.
    Plugin,
    /// `Import`.
    Script,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// Where a plugin's code lives.
pub struct SourceSpec {
    /// Directive kind.
    pub kind: SourceKind,
    /// Path to the plugin or script library.
    pub path: PathBuf,
}

impl From<SourceSpec> for PluginSource {
    fn from(v: SourceSpec) -> Self {
        match v.kind {
            SourceKind::Plugin => PluginSource::Plugin(v.path),
            SourceKind::Script => PluginSource::Script(v.path),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// One script step.
pub enum ScriptStep {
    /// Call a registered function. `null` arguments are omitted positions.
    Call {
        /// Function name (any registered casing).
        call: String,
        /// Arguments in call order.
        #[serde(default)]
        args: Vec<serde_json::Value>,
    },
    /// Literal line.
    Raw {
        /// Line text.
        raw: String,
    },
}

impl PluginSpec {
    /// Compile this entry into a registrable definition.
    pub fn to_def(&self) -> AvsResult<PluginDef> {
        let types: CommaList = self.types.clone().map(Into::into).unwrap_or_default();
        let signature = match (&self.signature, &self.name) {
            (Some(text), None) => Signature::compile_with_types(text, types),
            (None, Some(name)) => {
                let params: CommaList = self.params.clone().map(Into::into).unwrap_or_default();
                Signature::from_parts(name, params, types)
            }
            (Some(_), Some(_)) => {
                return Err(AvsError::validation(
                    "plugin entry must set either 'signature' or 'name', not both",
                ));
            }
            (None, None) => {
                return Err(AvsError::validation(
                    "plugin entry must set 'signature' or 'name'",
                ));
            }
        };
        let source = self.source.clone().map(Into::into).unwrap_or_default();
        Ok(PluginDef::from_signature(signature, source))
    }
}

impl Manifest {
    /// Decode a manifest from JSON text.
    pub fn from_json_str(s: &str) -> AvsResult<Self> {
        serde_json::from_str(s).map_err(|e| AvsError::serde(e.to_string()))
    }

    /// Read and decode a manifest file.
    ///
    /// A relative `base_dir` is taken relative to the manifest's directory; a missing one
    /// defaults to that directory.
    pub fn load(path: &Path) -> AvsResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest '{}'", path.display()))?;
        let mut manifest = Self::from_json_str(&text)?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        manifest.base_dir = Some(match manifest.base_dir.take() {
            Some(base) if base.is_absolute() => base,
            Some(base) => dir.join(base),
            None => dir.to_path_buf(),
        });
        Ok(manifest)
    }

    /// Path resolver for this manifest.
    pub fn paths(&self) -> AvsResult<PathResolver> {
        match &self.base_dir {
            Some(base) if base.is_absolute() => Ok(PathResolver::new(base)),
            Some(base) => {
                let cwd = PathResolver::from_current_dir()?;
                Ok(PathResolver::new(cwd.base().join(base)))
            }
            None => PathResolver::from_current_dir(),
        }
    }

    /// Build the registry described by this manifest.
    #[tracing::instrument(skip(self), fields(plugins = self.plugins.len()))]
    pub fn build_registry(&self) -> AvsResult<Registry> {
        let paths = self.paths()?;
        let mut registry = if self.core {
            Registry::with_core(paths)?
        } else {
            Registry::new(paths)
        };
        for spec in &self.plugins {
            registry.register(spec.to_def()?)?;
        }
        Ok(registry)
    }

    /// Run the script steps against `registry` and return the generated text.
    #[tracing::instrument(skip(self, registry), fields(steps = self.script.len()))]
    pub fn render(&self, registry: &Registry) -> AvsResult<String> {
        let mut script = Script::new(registry);
        for step in &self.script {
            match step {
                ScriptStep::Call { call, args } => {
                    let args = args
                        .iter()
                        .map(Arg::try_from)
                        .collect::<AvsResult<Vec<_>>>()?;
                    script.call(call, &args)?;
                }
                ScriptStep::Raw { raw } => {
                    script.raw(raw);
                }
            }
        }
        Ok(script.into_code())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/manifest.rs"]
mod tests;

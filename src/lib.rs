//! avscript turns compact parameter signatures into validating call generators for
//! AviSynth-style scripts.
//!
//! A signature such as `"Crop(ri:, ri:, ri:, ri:, b:align)"` is compiled once into a
//! [`Signature`]; its [`CallBinder`] then maps call-site [`Arg`]s onto the parameters,
//! checks each value against its modifier letters and emits a single line of script text
//! like `Crop(0, 0, 320, 240, align=true)`.
//!
//! # Pipeline overview
//!
//! 1. **Compile**: `&str -> Signature` (lenient; unknown modifier letters are inert)
//! 2. **Bind**: `Signature + [Arg] -> String` (strict; every violation is an [`AvsError`])
//! 3. **Register**: [`Registry`] stores binders by lower-cased name with casing aliases
//! 4. **Build**: [`Script`] accumulates generated lines plus `LoadPlugin`/`Import` directives
//!
//! # Modifier letters
//!
//! | Letter | Meaning |
//! |---|---|
//! | `q` | quote as a string |
//! | `p` | resolve as a path, then quote |
//! | `r` | required |
//! | `f` | required filename (resolved, quoted) |
//! | `n` | strings rejected |
//! | `t` | one of the signature's allowed types (quoted) |
//! | `b` / `d` / `i` | boolean / number / integer |
//! | `v` | bare identifier |
//! | `c` | color literal |
//! | `e` | escaped triple-quoted string |
//! | `a` | infer rendering from the runtime value |
//! | `m` | absorb several arguments |
//!
//! Nothing here touches the filesystem during binding: path resolution is lexical.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod modifier;
mod registry;
mod script;
mod signature;

pub use config::manifest::{ListSpec, Manifest, PluginSpec, ScriptStep, SourceKind, SourceSpec};
pub use foundation::error::{AvsError, AvsResult, TypeMismatchKind};
pub use foundation::path::PathResolver;
pub use foundation::value::{Arg, ArgKind};
pub use modifier::color::parse_color;
pub use modifier::escape::{escape, is_identifier, quote};
pub use modifier::process::{ProcessOptions, process};
pub use registry::plugins::{
    CustomCall, PluginCall, PluginDef, PluginSource, RESERVED_NAMES, Registry, RegistryEntry,
};
pub use script::builder::Script;
pub use signature::binder::CallBinder;
pub use signature::compile::{CommaList, ParameterDefinition, Signature};
pub use signature::modifier::{Modifier, Modifiers, ParameterKind};

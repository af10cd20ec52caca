use std::sync::Arc;

use crate::{
    foundation::{
        error::{AvsError, AvsResult},
        path::PathResolver,
        value::Arg,
    },
    modifier::process::{ProcessOptions, process},
    signature::{
        compile::Signature,
        modifier::{Modifier, ParameterKind},
    },
};

/// Maps call-site arguments onto a [`Signature`] and serializes the call.
///
/// A binder carries no state besides its signature: binding the same arguments twice
/// yields byte-identical output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallBinder {
    signature: Arc<Signature>,
}

impl CallBinder {
    /// Build a binder closed over `signature`.
    pub fn new(signature: Signature) -> Self {
        Self {
            signature: Arc::new(signature),
        }
    }

    /// The compiled signature this binder validates against.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Validate `args` and produce `Name(frag1, id=frag2, ...)`.
    ///
    /// Arguments and definitions are walked by two cursors that advance together, except
    /// that a multi-value definition absorbs a run of arguments. [`Arg::Unset`] omits its
    /// position. Any failure aborts the whole call.
    #[tracing::instrument(
        level = "debug",
        skip(self, args, paths),
        fields(call = %self.signature.name(), argc = args.len())
    )]
    pub fn bind(&self, args: &[Arg], paths: &PathResolver) -> AvsResult<String> {
        let sig = self.signature.as_ref();
        let defs = sig.params();
        let options = ProcessOptions {
            allowed_types: sig.allowed_types(),
            paths,
        };

        let mut fragments: Vec<String> = Vec::with_capacity(args.len());
        let mut a = 0usize;
        let mut d = 0usize;
        while a < args.len() {
            let Some(def) = defs.get(d) else {
                return Err(AvsError::SignatureTooManyArguments {
                    call: sig.name().to_string(),
                    given: args.len(),
                    accepted: defs.len(),
                });
            };
            let arg = &args[a];

            if arg.is_unset() {
                tracing::trace!(position = a, "argument omitted");
                a += 1;
                d += 1;
                continue;
            }

            match def.kind() {
                ParameterKind::Single => {
                    let fragment = process(&def.modifiers, arg.clone(), options)?;
                    match &def.identifier {
                        Some(id) => fragments.push(format!("{id}={fragment}")),
                        None => {
                            if fragments.len() < a {
                                return Err(AvsError::SignatureAmbiguousPosition {
                                    call: sig.name().to_string(),
                                    position: a,
                                });
                            }
                            fragments.push(fragment);
                        }
                    }
                    a += 1;
                }
                kind @ (ParameterKind::MultiHomogeneous | ParameterKind::MultiAuto) => {
                    let end = run_end(args, a, kind);
                    tracing::trace!(from = a, to = end, "multi-value run");
                    for value in args[a..end].iter().filter(|v| !v.is_unset()) {
                        fragments.push(process(&def.modifiers, value.clone(), options)?);
                    }
                    a = end;
                }
            }
            d += 1;
        }

        for (position, def) in defs.iter().enumerate() {
            if !def.modifiers.has_any(&[Modifier::Required, Modifier::File]) {
                continue;
            }
            if !args.get(position).is_none_or(Arg::is_unset) {
                continue;
            }
            let call = sig.name().to_string();
            let identifier = def.identifier.clone();
            return Err(if def.has(Modifier::File) {
                AvsError::SignatureMissingFilename {
                    call,
                    position,
                    identifier,
                }
            } else {
                AvsError::SignatureMissingRequired {
                    call,
                    position,
                    identifier,
                }
            });
        }

        Ok(format!("{}({})", sig.name(), fragments.join(", ")))
    }
}

/// Exclusive end of the run a multi-value definition absorbs starting at `start`.
fn run_end(args: &[Arg], start: usize, kind: ParameterKind) -> usize {
    if kind == ParameterKind::MultiAuto {
        return args.len();
    }
    let first = args[start].kind();
    args[start..]
        .iter()
        .position(|v| v.kind() != first)
        .map_or(args.len(), |off| start + off)
}

#[cfg(test)]
#[path = "../../tests/unit/signature/binder.rs"]
mod tests;

use std::path::{Component, Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::AvsResult;

/// Resolves script-relative paths to absolute, normalized form.
///
/// Resolution is purely lexical: `.` and `..` are folded and nothing touches the filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResolver {
    base: PathBuf,
}

impl PathResolver {
    /// Resolve against `base`. A relative `base` is normalized as-is.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: normalize(&base.into()),
        }
    }

    /// Resolve against the process working directory.
    pub fn from_current_dir() -> AvsResult<Self> {
        let cwd = std::env::current_dir().context("read current working directory")?;
        Ok(Self::new(cwd))
    }

    /// Directory relative paths are joined onto.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Absolute, normalized form of `path`.
    pub fn resolve(&self, path: &str) -> String {
        let p = Path::new(path);
        let joined = if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base.join(p)
        };
        normalize(&joined).to_string_lossy().into_owned()
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                // never climb above the root
                if !matches!(out.components().next_back(), None | Some(Component::RootDir)) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/path.rs"]
mod tests;

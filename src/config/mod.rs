//! JSON manifests describing plugins and the script built from them.

pub(crate) mod manifest;

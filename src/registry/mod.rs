//! Explicit plugin registry and the built-in filter table.

pub(crate) mod builtin;
pub(crate) mod plugins;

//! Per-value modifier chain and its string/color collaborators.

pub(crate) mod color;
pub(crate) mod escape;
pub(crate) mod process;

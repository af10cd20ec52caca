//! Signature micro-language: modifier flags, the compiler and the call binder.

pub(crate) mod binder;
pub(crate) mod compile;
pub(crate) mod modifier;

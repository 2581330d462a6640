//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod clean;

pub(crate) use build::BuildArgs;
pub(crate) use clean::CleanArgs;

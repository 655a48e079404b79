//! Composite changelog generation and output.

/// Builds the composite changelog from per-dependency generator output.
pub mod composite;

/// Toolchain implementation that shells out to `git` and `git-cliff`.
pub mod git_cliff;

/// Capability traits for cloning and changelog generation.
pub mod traits;

/// Atomic prepend of the composite to the changelog file.
pub mod writer;

//! Failure taxonomy for the generators.
//!
//! Classification is total and synthesis has no partial-failure states, so only
//! two things can go wrong inside the core: an unknown dialect name, and the
//! guard against pathologically deep input. Invalid JSON never reaches the
//! core; the shell handles it (see `parse`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Unrecognized dialect name. We fail fast rather than fall back to a
    /// default, so a typo never silently changes the emitted `$schema` URI.
    #[error("unknown schema dialect {0:?} (expected one of: 2020-12, 2019-09, draft-07, draft-04)")]
    UnknownDialect(String),

    /// Nesting depth guard tripped. Fatal to the conversion request only.
    #[error("maximum nesting depth ({limit}) exceeded at {path}")]
    DepthExceeded { limit: usize, path: String },
}

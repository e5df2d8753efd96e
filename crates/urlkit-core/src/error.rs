//! Engine error type and the tagged best-effort result.

use thiserror::Error;

/// Failure raised by URL decomposition, encoding, or network operations.
/// Best-effort operations never surface this; they degrade instead (see [`BestEffort`]).
#[derive(Debug, Error)]
pub enum UrlError {
    /// Empty/blank input, missing scheme, or a component the grammar rejects.
    #[error("malformed URL: {0}")]
    Malformed(String),
    /// Percent-decoding produced bytes that are not valid UTF-8.
    #[error("encoding failed: {0}")]
    Encoding(String),
    /// Terminal HTTP status that is neither 2xx nor a followable 3xx.
    #[error("unexpected HTTP status {0}")]
    Status(u32),
    /// Connection, timeout, or protocol failure at the transport boundary.
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
}

/// Outcome of a best-effort operation (normalize, resolve, query rewrites).
///
/// `Degraded` means an internal failure was swallowed and the input was
/// returned unchanged, so callers can tell "no-op succeeded" from "failure
/// swallowed" without the operation ever erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort<T> {
    /// The operation ran to completion.
    Applied(T),
    /// An internal failure was swallowed; the value is the untouched input.
    Degraded(T),
}

impl<T> BestEffort<T> {
    pub fn value(&self) -> &T {
        match self {
            BestEffort::Applied(v) | BestEffort::Degraded(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            BestEffort::Applied(v) | BestEffort::Degraded(v) => v,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, BestEffort::Degraded(_))
    }
}

/// Crate-level error types for refmark lookups.

/// All errors here signal a mismatch between registration and lookup call
/// sites. They are never retried and carry the offending key or value so the
/// bad call site can be found without a debugger.
#[allow(clippy::error_impl_error, reason = "crate-level error type re-exported at the root")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An anchor was requested for text that is not a plain decimal number.
    #[error("anchor value is not numeric: `{value}`")]
    InvalidAnchorValue {
        /// The text the anchor was requested for.
        value: String,
    },

    /// A required entry was absent from a supplied mapping.
    #[error("missing entry in map for required key: `{key}`")]
    MissingRequiredKey {
        /// The key that was required but absent.
        key: String,
    },

    /// A number lookup named a key that was never registered.
    #[error(
        "reference key `{key}` not found: key names may be mismatched, or the lookup ran \
         before any non-empty text was added for this key"
    )]
    ReferenceNotFound {
        /// The reference key that has no entry.
        key: String,
    },
}

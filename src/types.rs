/// Core domain types for refmark entries and text merging.

/// Where newly added text lands when a reference key already holds text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePosition {
    /// New text goes after the existing text.
    Append,
    /// New text goes before the existing text.
    Prepend,
}

/// One registered reference. Identity is `key`; `number` is assigned at
/// first registration and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    /// Caller-supplied identity for this reference.
    pub key: String,
    /// One-based position in registration order among all entries.
    pub number: u32,
    /// Accumulated display text. Never empty once the entry exists.
    pub text: String,
}

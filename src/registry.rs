//! The ordered reference registry: sequential numbering, text accumulation,
//! and rendering queries.

use std::collections::HashSet;

use crate::anchor;
use crate::error::Error;
use crate::export::ReferenceRow;
use crate::markup;
use crate::types::{MergePosition, ReferenceEntry};

/// Gathers reference keys and their incremental reference numbers during a
/// document-generation pass. Keys are numbered in first-seen order starting
/// at 1; repeated additions for a key merge their text into the existing
/// entry. Queries answer with anchors and styled markers for rendering, and
/// the accumulated entries export as rows for the footnote list.
///
/// One registry serves one pass. There is no delete or reset; the registry
/// is constructed empty and discarded when the pass completes.
#[derive(Debug)]
pub struct ReferenceRegistry {
    /// Entries in registration order, unique by key.
    entries: Vec<ReferenceEntry>,
    /// Mirror of the entry keys for O(1) membership checks.
    keys_present: HashSet<String>,
    /// Number the next newly registered key will receive.
    next_number: u32,
}

impl Default for ReferenceRegistry {
    /// Same as [`ReferenceRegistry::new`].
    fn default() -> Self {
        return Self::new();
    }
}

impl ReferenceRegistry {
    /// Add reference text for `key`, appending to any existing text.
    /// Call this before querying the number, anchor, or styled marker for
    /// `key`. Returns `key` unchanged so calls chain inside report
    /// expressions.
    pub fn add_text(&mut self, text: &str, key: &str) -> String {
        return self.add_text_with_position(text, key, MergePosition::Append);
    }

    /// Add reference text for `key`, merging at the given position when the
    /// key already holds text.
    ///
    /// For a new key, non-empty `text` registers the key with the next
    /// reference number; empty text registers nothing and consumes no
    /// number. For an existing key, `text` is joined to the stored text
    /// with a newline, unless it is already contained in the stored text.
    /// Returns `key` unchanged in all cases.
    pub fn add_text_with_position(
        &mut self,
        text: &str,
        key: &str,
        position: MergePosition,
    ) -> String {
        if self.keys_present.contains(key) {
            if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
                // The surrounding pipeline can evaluate one expression twice
                // (split sections re-render), so the same text may arrive
                // twice for one key. A substring match means we have it.
                if !text.is_empty() && !entry.text.contains(text) {
                    entry.text = match position {
                        MergePosition::Append => format!("{}\n{text}", entry.text),
                        MergePosition::Prepend => format!("{text}\n{}", entry.text),
                    };
                }
            }
            return key.to_string();
        }

        if !text.is_empty() {
            self.entries.push(ReferenceEntry {
                key: key.to_string(),
                number: self.next_number,
                text: text.to_string(),
            });
            self.keys_present.insert(key.to_string());
            self.next_number = self.next_number.saturating_add(1);
        }

        return key.to_string();
    }

    /// Show a long field value truncated inline while pushing the full value
    /// into the reference text for `key`.
    ///
    /// If `value_text` has more than `max_length` characters, the full text
    /// is prepended to the reference text for `key` and the first
    /// `max_length` characters are returned with a trailing ellipsis.
    /// Otherwise `value_text` comes back unchanged and the registry is not
    /// touched. Counts characters, not bytes.
    pub fn add_truncated_text_if_exceeds_length(
        &mut self,
        value_text: &str,
        key: &str,
        max_length: usize,
    ) -> String {
        if value_text.chars().count() > max_length {
            self.add_text_with_position(value_text, key, MergePosition::Prepend);
            let truncated: String = value_text.chars().take(max_length).collect();
            return format!("{truncated}…");
        }
        return value_text.to_string();
    }

    /// The anchor identifier for `key`, or `None` when the key was never
    /// registered — callers skip rendering the anchor when there is nothing
    /// to link to.
    pub fn anchor_for_key(&self, key: &str) -> Option<String> {
        if !self.keys_present.contains(key) {
            return None;
        }
        let number = self.number_for_key(key).ok()?;
        return Some(anchor::anchor_for_number(number));
    }

    /// The anchor for the lowest-numbered reference among whichever of
    /// `keys` are registered, or `None` if none are. When several candidate
    /// keys could apply to one display position, this links to the
    /// earliest-registered reference.
    pub fn anchor_for_keys(&self, keys: &[&str]) -> Option<String> {
        let smallest = self
            .filter_keys_present(keys)
            .into_iter()
            .filter_map(|key| return self.number_for_key(key).ok())
            .min()?;
        return Some(anchor::anchor_for_number(smallest));
    }

    /// Typed read-only view of all entries in registration order.
    pub fn entries(&self) -> &[ReferenceEntry] {
        return &self.entries;
    }

    /// Snapshot of all entries in registration order as all-strings rows,
    /// for hand-off to the row-oriented consumer that renders the footnote
    /// list.
    pub fn export_entries(&self) -> Vec<ReferenceRow> {
        return self.entries.iter().map(ReferenceRow::from).collect();
    }

    /// Keep only the keys that are registered.
    fn filter_keys_present<'a>(&self, keys: &[&'a str]) -> Vec<&'a str> {
        return keys
            .iter()
            .copied()
            .filter(|key| return self.keys_present.contains(*key))
            .collect();
    }

    /// Whether any reference has been registered. Callers use this to
    /// decide whether to render a footnote section at all.
    pub fn has_any_references(&self) -> bool {
        return !self.entries.is_empty();
    }

    /// Create an empty registry for a new document-generation pass.
    pub fn new() -> Self {
        return Self {
            entries: Vec::new(),
            keys_present: HashSet::new(),
            next_number: 1,
        };
    }

    /// The reference number assigned to `key`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ReferenceNotFound` if `key` was never registered —
    /// either the key names are mismatched between call sites, or the text
    /// supplied at registration time was empty so the key never got an
    /// entry. The defensive wrappers (`anchor_for_key`,
    /// `styled_number_text_for_key`) degrade gracefully instead.
    pub fn number_for_key(&self, key: &str) -> Result<u32, Error> {
        for entry in &self.entries {
            if entry.key == key {
                return Ok(entry.number);
            }
        }
        return Err(Error::ReferenceNotFound {
            key: key.to_string(),
        });
    }

    /// The styled superscript marker for `key`, or the empty string when
    /// the key was never registered. Safe to embed unconditionally in
    /// output; it degrades to a no-op when there is nothing to footnote.
    pub fn styled_number_text_for_key(&self, key: &str) -> String {
        if !self.keys_present.contains(key) {
            return String::new();
        }
        let Ok(number) = self.number_for_key(key) else {
            return String::new();
        };
        return markup::styled_superscript(&number.to_string());
    }

    /// The styled superscript marker listing the numbers of whichever of
    /// `keys` are registered, sorted ascending and comma-joined, or the
    /// empty string if none are registered.
    pub fn styled_number_text_for_keys(&self, keys: &[&str]) -> String {
        let mut numbers: Vec<u32> = self
            .filter_keys_present(keys)
            .into_iter()
            .filter_map(|key| return self.number_for_key(key).ok())
            .collect();
        if numbers.is_empty() {
            return String::new();
        }
        numbers.sort_unstable();
        numbers.dedup();
        let joined = numbers
            .iter()
            .map(|number| return number.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return markup::styled_superscript(&joined);
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_contiguous_in_call_order() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("first note", "a");
        registry.add_text("second note", "b");
        registry.add_text("third note", "c");

        let numbers: Vec<u32> = registry.entries().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(registry.number_for_key("b").unwrap(), 2);
    }

    #[test]
    fn repeated_key_keeps_its_first_number() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("first", "a");
        registry.add_text("more about first", "a");
        registry.add_text("second", "b");

        assert_eq!(registry.number_for_key("a").unwrap(), 1);
        assert_eq!(registry.number_for_key("b").unwrap(), 2);
        assert_eq!(registry.entries().len(), 2);
    }

    #[test]
    fn duplicate_text_for_a_key_is_ignored() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("same note", "a");
        registry.add_text("same note", "a");

        assert_eq!(registry.entries()[0].text, "same note");
    }

    #[test]
    fn new_text_is_appended_on_a_new_line() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("first line", "a");
        registry.add_text("second line", "a");

        assert_eq!(registry.entries()[0].text, "first line\nsecond line");
    }

    #[test]
    fn prepend_reverses_the_merge_order() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("first line", "a");
        registry.add_text_with_position("second line", "a", MergePosition::Prepend);

        assert_eq!(registry.entries()[0].text, "second line\nfirst line");
    }

    #[test]
    fn empty_text_registers_nothing_and_consumes_no_number() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("", "a");
        registry.add_text("real note", "b");

        assert!(registry.number_for_key("a").is_err());
        assert_eq!(registry.number_for_key("b").unwrap(), 1);
    }

    #[test]
    fn returns_the_key_for_chaining() {
        let mut registry = ReferenceRegistry::new();
        assert_eq!(registry.add_text("note", "a"), "a");
        assert_eq!(registry.add_text("", "never-registered"), "never-registered");
    }

    #[test]
    fn anchor_for_absent_key_is_none() {
        let registry = ReferenceRegistry::new();
        assert!(registry.anchor_for_key("missing").is_none());
    }

    #[test]
    fn anchor_for_present_key_uses_its_number() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("note", "a");
        registry.add_text("other", "b");

        assert_eq!(registry.anchor_for_key("b").unwrap(), "ref_2");
    }

    #[test]
    fn anchor_for_keys_picks_the_lowest_number() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("one", "b");
        registry.add_text("two", "x");
        registry.add_text("three", "a");

        // "a" has number 3 and "b" has number 1.
        assert_eq!(registry.anchor_for_keys(&["a", "b"]).unwrap(), "ref_1");
    }

    #[test]
    fn anchor_for_keys_with_no_present_key_is_none() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("note", "a");
        assert!(registry.anchor_for_keys(&["x", "y"]).is_none());
    }

    #[test]
    fn styled_text_for_absent_key_is_empty() {
        let registry = ReferenceRegistry::new();
        assert_eq!(registry.styled_number_text_for_key("missing"), "");
    }

    #[test]
    fn styled_text_embeds_the_number() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("note", "a");

        assert_eq!(
            registry.styled_number_text_for_key("a"),
            " <sup><style forecolor='blue' isUnderline='true'>1</style></sup>"
        );
    }

    #[test]
    fn styled_text_for_keys_sorts_numbers_ascending() {
        let mut registry = ReferenceRegistry::new();
        for key in ["k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8"] {
            registry.add_text("note", key);
        }

        // Numbers 5, 2, 8 queried out of order come back sorted.
        assert_eq!(
            registry.styled_number_text_for_keys(&["k5", "k2", "k8"]),
            " <sup><style forecolor='blue' isUnderline='true'>2, 5, 8</style></sup>"
        );
    }

    #[test]
    fn styled_text_for_keys_skips_absent_keys() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("note", "a");

        assert_eq!(
            registry.styled_number_text_for_keys(&["missing", "a"]),
            " <sup><style forecolor='blue' isUnderline='true'>1</style></sup>"
        );
        assert_eq!(registry.styled_number_text_for_keys(&["missing"]), "");
    }

    #[test]
    fn truncation_shortens_and_registers_the_full_text() {
        let mut registry = ReferenceRegistry::new();
        let shown = registry.add_truncated_text_if_exceeds_length("hello world", "a", 5);

        assert_eq!(shown, "hello…");
        assert_eq!(registry.entries()[0].text, "hello world");
    }

    #[test]
    fn truncation_prepends_the_full_text_to_existing_references() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("see appendix", "a");
        registry.add_truncated_text_if_exceeds_length("a very long field value", "a", 6);

        assert_eq!(
            registry.entries()[0].text,
            "a very long field value\nsee appendix"
        );
    }

    #[test]
    fn short_values_pass_through_untouched() {
        let mut registry = ReferenceRegistry::new();
        let shown = registry.add_truncated_text_if_exceeds_length("short", "a", 10);

        assert_eq!(shown, "short");
        assert!(!registry.has_any_references());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mut registry = ReferenceRegistry::new();
        let shown = registry.add_truncated_text_if_exceeds_length("héllo wörld", "a", 5);

        assert_eq!(shown, "héllo…");
        assert_eq!(registry.entries()[0].text, "héllo wörld");
    }

    #[test]
    fn has_any_references_flips_on_first_registration() {
        let mut registry = ReferenceRegistry::new();
        assert!(!registry.has_any_references());

        registry.add_text("", "empty-does-not-count");
        assert!(!registry.has_any_references());

        registry.add_text("note", "a");
        assert!(registry.has_any_references());
    }

    #[test]
    fn lookup_for_unregistered_key_fails_fast() {
        let registry = ReferenceRegistry::new();
        let err = registry.number_for_key("nope").unwrap_err();
        assert!(matches!(err, Error::ReferenceNotFound { key } if key == "nope"));
    }

    #[test]
    fn export_preserves_registration_order() {
        let mut registry = ReferenceRegistry::new();
        registry.add_text("zeta note", "z");
        registry.add_text("alpha note", "a");

        let rows = registry.export_entries();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "z");
        assert_eq!(rows[0].number, "1");
        assert_eq!(rows[1].key, "a");
        assert_eq!(rows[1].number, "2");
    }
}

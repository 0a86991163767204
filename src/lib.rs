//! Ordered footnote reference registry for document generation.
//!
//! A [`ReferenceRegistry`] assigns monotonically increasing reference
//! numbers to caller-supplied keys on first sight, accumulates footnote
//! text across repeated additions for the same key, and answers rendering
//! queries: anchor identifiers for internal document links and styled
//! superscript markers for inline display. When the pass finishes, the
//! accumulated entries export in registration order as plain rows for the
//! layer that renders the footnote list.
//!
//! One registry serves one document-generation pass, single-threaded; it is
//! constructed empty and discarded afterwards. The registry emits data only:
//! the surrounding rendering engine, styling conventions, and all I/O are
//! the caller's concern.
//!
//! ```
//! use refmark::ReferenceRegistry;
//!
//! let mut registry = ReferenceRegistry::new();
//! registry.add_text("Figures exclude intercompany balances.", "ic-note");
//!
//! assert_eq!(registry.anchor_for_key("ic-note").unwrap(), "ref_1");
//! assert!(registry.has_any_references());
//! ```

mod anchor;
mod error;
mod export;
mod lookup;
mod markup;
mod registry;
mod types;

pub use crate::anchor::anchor_for_number_text;
pub use crate::error::Error;
pub use crate::export::ReferenceRow;
pub use crate::lookup::required_value;
pub use crate::registry::ReferenceRegistry;
pub use crate::types::{MergePosition, ReferenceEntry};

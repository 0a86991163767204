//! Anchor identifiers linking inline markers to footnote entries.

use crate::error::Error;

/// Prefix shared by every anchor identifier. Must match the anchor-target
/// convention of the rendering layer byte for byte.
const ANCHOR_PREFIX: &str = "ref_";

/// Format the anchor identifier for an assigned reference number.
pub(crate) fn anchor_for_number(number: u32) -> String {
    return format!("{ANCHOR_PREFIX}{number}");
}

/// Validate `value` as plain decimal text and format it as an anchor.
/// Report designers can call this directly with arbitrary expression output,
/// so the numeric check is repeated here rather than trusted.
///
/// # Errors
///
/// Returns `Error::InvalidAnchorValue` if `value` is not an unsigned decimal
/// integer.
pub fn anchor_for_number_text(value: &str) -> Result<String, Error> {
    let is_decimal = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
    if !is_decimal || value.parse::<u32>().is_err() {
        return Err(Error::InvalidAnchorValue {
            value: value.to_string(),
        });
    }
    return Ok(format!("{ANCHOR_PREFIX}{value}"));
}

//! Required-key lookup for configuration maps.

use std::collections::HashMap;

use crate::error::Error;

/// Fetch the value for `key` or fail. For configuration maps where a missing
/// entry is a setup mistake that should surface immediately, never a silent
/// default. Generic over the value type; independent of the registry.
///
/// # Errors
///
/// Returns `Error::MissingRequiredKey` if `key` has no entry in `map`.
pub fn required_value<'a, V>(map: &'a HashMap<String, V>, key: &str) -> Result<&'a V, Error> {
    return map.get(key).ok_or_else(|| {
        return Error::MissingRequiredKey {
            key: key.to_string(),
        };
    });
}

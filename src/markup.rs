//! Styled superscript markup for inline reference markers.

/// Substitute `value` (a single number or a comma-joined list) into the
/// fixed superscript marker run. The leading space separates the marker
/// from the field text it follows. No escaping is applied; the rendering
/// layer owns the markup conventions.
pub(crate) fn styled_superscript(value: &str) -> String {
    return format!(" <sup><style forecolor='blue' isUnderline='true'>{value}</style></sup>");
}

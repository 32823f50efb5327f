/// Partial-update field filtering
///
/// A PATCH payload carries only the fields the caller wants changed, but
/// "present" and "meant to change" are not the same thing for text fields.
/// The rules, applied per field independently:
///
/// - A string field counts as a requested change only when it is present,
///   non-null, and non-empty after trimming surrounding whitespace. The
///   stored value is the original string, not the trimmed one.
/// - An empty or whitespace-only string means "no change requested" — it is
///   NOT a request to clear the field. There is no clear representation in
///   this API.
/// - An absent field or explicit JSON null is never a change (serde maps
///   both to `None`).
/// - Non-string fields (booleans, timestamps, arrays, enumerations) count
///   on presence alone: `false`, `[]`, and epoch timestamps are all real
///   changes.
///
/// # Example
///
/// ```
/// use ticklist_shared::patch;
///
/// assert_eq!(patch::text_change(Some("alice".to_string())), Some("alice".to_string()));
/// assert_eq!(patch::text_change(Some("".to_string())), None);
/// assert_eq!(patch::text_change(Some("   ".to_string())), None);
/// assert_eq!(patch::text_change(None), None);
/// ```

/// Returns true when a partial-update string field actually requests a change.
pub fn is_text_change(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.trim().is_empty())
}

/// Filters a partial-update string field down to a real change.
///
/// Keeps the original (untrimmed) value; [`is_text_change`] only decides
/// whether the field is a change at all.
pub fn text_change(field: Option<String>) -> Option<String> {
    field.filter(|value| is_text_change(Some(value.as_str())))
}

//! Record keys for the persistent backend.
//!
//! Joining item id and property name directly is ambiguous (`"12" + "3RT"` and
//! `"123" + "RT"` both give `"123RT"`), so the id's byte length is written first:
//! `<len>:<item id><name>`.

/// Marks entries of the property-name table; LMDB rejects empty keys
const NAME_MARKER: char = '#';

/// Unambiguous key for one `(item_id, name)` record
pub(crate) fn record_key(item_id: &str, name: &str) -> String {
    format!("{}:{}{}", item_id.len(), item_id, name)
}

/// Key of `name` in the property-name table
pub(crate) fn name_key(name: &str) -> String {
    format!("{}{}", NAME_MARKER, name)
}

/// Property name stored under a name-table key
pub(crate) fn name_from_key(key: &str) -> &str {
    key.strip_prefix(NAME_MARKER).unwrap_or(key)
}

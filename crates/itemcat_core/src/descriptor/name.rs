//! Item name validation applied before a descriptor factory runs.

use crate::descriptor::error::CreateItemError;

const UNSAFE_NAME_CHARS: &[char] = &[
    '?', '*', '/', '\\', '%', '!', '@', '#', '$', '^', '&', '|', '<', '>', '[', ']', ':', ';',
];

/// Validates one item name.
///
/// # Errors
/// - Blank names, names with leading/trailing whitespace, `.` and `..`.
/// - Names containing a path separator or another unsafe character.
pub fn check_item_name(name: &str) -> Result<(), CreateItemError> {
    if name.trim().is_empty() {
        return Err(CreateItemError::InvalidName(
            "name must not be blank".to_string(),
        ));
    }
    if name.trim() != name {
        return Err(CreateItemError::InvalidName(format!(
            "name must not start or end with whitespace: `{name}`"
        )));
    }
    if name == "." || name == ".." {
        return Err(CreateItemError::InvalidName(format!(
            "`{name}` is a reserved name"
        )));
    }
    if let Some(c) = name.chars().find(|c| UNSAFE_NAME_CHARS.contains(c)) {
        return Err(CreateItemError::InvalidName(format!(
            "`{c}` is an unsafe character in `{name}`"
        )));
    }
    Ok(())
}

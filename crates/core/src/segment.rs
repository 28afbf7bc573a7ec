//! Segment algebra
//!
//! Pure functions over a single path segment (the final one of a locator,
//! called its name). Suffix rules follow the usual filesystem convention:
//! leading dots belong to the stem, and a trailing dot means no suffix.

use crate::error::{Error, Result};

/// Separator between key segments
pub const DELIMITER: char = '/';

/// Characters that end the path component of a URI
pub(crate) const PATH_TERMINATORS: [char; 2] = ['?', '#'];

/// The final component's last suffix, or `""`
///
/// The last `.` only starts a suffix when it is neither the first nor the
/// last character of `name`.
pub fn suffix(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 && i < name.len() - 1 => &name[i..],
        _ => "",
    }
}

/// Every suffix of `name`, in order
///
/// Leading dots are stripped first, so `..tar.gz` gives `[".gz"]`.
pub fn suffixes(name: &str) -> Vec<&str> {
    if name.ends_with('.') {
        return Vec::new();
    }
    let trimmed = name.trim_start_matches('.');
    let dots: Vec<usize> = trimmed.match_indices('.').map(|(i, _)| i).collect();
    dots.iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = dots.get(n + 1).copied().unwrap_or(trimmed.len());
            &trimmed[start..end]
        })
        .collect()
}

/// `name` without its last suffix
pub fn stem(name: &str) -> &str {
    &name[..name.len() - suffix(name).len()]
}

/// Check that `name` is exactly one non-empty segment
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name.contains(DELIMITER)
        || name.contains(PATH_TERMINATORS)
    {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Check that `suffix` is empty or a dot followed by segment text
pub fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.contains(DELIMITER)
        || suffix.contains(PATH_TERMINATORS)
        || (!suffix.is_empty() && !suffix.starts_with('.'))
        || suffix == "."
    {
        return Err(Error::InvalidSuffix(suffix.to_string()));
    }
    Ok(())
}

/// Replace the last suffix of `name`, appending when it has none
///
/// An empty `new_suffix` removes the current suffix.
pub fn replace_suffix(name: &str, new_suffix: &str) -> String {
    let mut out = String::with_capacity(name.len() + new_suffix.len());
    out.push_str(stem(name));
    out.push_str(new_suffix);
    out
}

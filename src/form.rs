//! Form-submission handling for spawner options.
//!
//! The hub hands the spawner a form submission as a mapping from field name
//! to a *list* of string values, since HTML forms allow repeated fields.
//! Only the first value of each field is meaningful to the spawner; this
//! module flattens the submission into the flat options mapping the rest of
//! the crate works with, and provides the scalar parsers for typed fields.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex for memory-size option values: `<digits><K|M|G>` with an optional
/// trailing `B` and optional spaces before the unit, case-insensitive.
static MEMORY_EXPR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?P<num>\d+)\s*(?P<unit>[KMG])B?$").unwrap());

/// Flatten a form submission into a flat key/value options mapping.
///
/// For each field the first submitted value is taken and trimmed; fields
/// whose first value is empty after trimming are dropped, as are fields
/// submitted with no values at all. Extra values are ignored.
pub fn options_from_form(formdata: &HashMap<String, Vec<String>>) -> HashMap<String, String> {
    let mut options = HashMap::new();

    for (field, values) in formdata {
        let value = match values.first() {
            Some(value) => value.trim(),
            None => continue,
        };

        // Skip empty field names and cleared fields
        if field.is_empty() || value.is_empty() {
            continue;
        }

        options.insert(field.clone(), value.to_string());
    }

    options
}

/// Parse a boolean option value.
///
/// Returns `Some(true)` for "true", `Some(false)` for "false" (case
/// insensitive), and `None` for anything else.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parse a memory-size option value into bytes.
///
/// Accepts `<digits><K|M|G>` with an optional `B` suffix, e.g. `"8G"`,
/// `"512M"`, `"16 kB"`. Returns `None` for anything else, including sizes
/// that overflow `u64`.
///
/// # Examples
///
/// ```
/// use swanspawner_config_rs::parse_memory;
///
/// assert_eq!(parse_memory("8G"), Some(8 * 1024 * 1024 * 1024));
/// assert_eq!(parse_memory("512M"), Some(512 * 1024 * 1024));
/// assert_eq!(parse_memory("lots"), None);
/// ```
pub fn parse_memory(value: &str) -> Option<u64> {
    let caps = MEMORY_EXPR.captures(value.trim())?;
    let num: u64 = caps["num"].parse().ok()?;
    let factor: u64 = match caps["unit"].to_ascii_uppercase().as_str() {
        "K" => 1 << 10,
        "M" => 1 << 20,
        _ => 1 << 30,
    };
    num.checked_mul(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(field, values)| {
                (
                    field.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_options_from_form_takes_first_value() {
        let formdata = form(&[("lcg", &["LCG_104", "LCG_103"])]);
        let options = options_from_form(&formdata);
        assert_eq!(options.get("lcg"), Some(&"LCG_104".to_string()));
    }

    #[test]
    fn test_options_from_form_trims_values() {
        let formdata = form(&[("repository", &["  https://github.com/user/repo  "])]);
        let options = options_from_form(&formdata);
        assert_eq!(
            options.get("repository"),
            Some(&"https://github.com/user/repo".to_string())
        );
    }

    #[test]
    fn test_options_from_form_drops_empty_fields() {
        let formdata = form(&[("repository", &["   "]), ("scriptenv", &[]), ("", &["x"])]);
        let options = options_from_form(&formdata);
        assert!(options.is_empty());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("FALSE"), Some(false));
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("1"), None);
    }

    #[test]
    fn test_parse_memory_units() {
        assert_eq!(parse_memory("16K"), Some(16 * 1024));
        assert_eq!(parse_memory("512M"), Some(512 * 1024 * 1024));
        assert_eq!(parse_memory("8G"), Some(8 * 1024 * 1024 * 1024));
    }

    #[test]
    fn test_parse_memory_accepts_b_suffix_and_spaces() {
        assert_eq!(parse_memory("2GB"), Some(2 * 1024 * 1024 * 1024));
        assert_eq!(parse_memory("16 kB"), Some(16 * 1024));
        assert_eq!(parse_memory(" 4g "), Some(4 * 1024 * 1024 * 1024));
    }

    #[test]
    fn test_parse_memory_rejects_junk() {
        assert_eq!(parse_memory(""), None);
        assert_eq!(parse_memory("lots"), None);
        assert_eq!(parse_memory("8T"), None);
        assert_eq!(parse_memory("G8"), None);
        assert_eq!(parse_memory("-1G"), None);
    }

    #[test]
    fn test_parse_memory_overflow() {
        assert_eq!(parse_memory("99999999999999999999G"), None);
        assert_eq!(parse_memory("18446744073709551615G"), None);
    }
}

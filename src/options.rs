//! User options store and typed query methods.
//!
//! This module contains the main `UserOptions` struct wrapping the flat
//! key/value options mapping a spawn request carries, with typed accessors
//! for the well-known form fields.

use crate::error::{Error, Result};
use crate::form::{options_from_form, parse_bool, parse_memory};
use crate::repository::project_path;
use std::collections::HashMap;

/// User options for one spawn request.
///
/// The mapping is supplied by the caller for the duration of a single spawn
/// and never persisted. Unknown keys are kept and ignored; only the fields
/// the spawner understands have typed accessors.
///
/// # Examples
///
/// ```
/// use swanspawner_config_rs::UserOptions;
/// use std::collections::HashMap;
///
/// let mut data = HashMap::new();
/// data.insert(
///     "repository".to_string(),
///     "https://github.com/user/myproject.git".to_string(),
/// );
/// let options = UserOptions::new(data);
///
/// let path = options.repo_project_path();
/// assert!(path.ends_with("myproject"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserOptions {
    /// Raw key-value pairs from the options form.
    data: HashMap<String, String>,
}

impl UserOptions {
    /// Wrap an already-flattened options mapping.
    pub fn new(data: HashMap<String, String>) -> Self {
        UserOptions { data }
    }

    /// Build options from a raw form submission (field name to value list).
    ///
    /// See [`options_from_form`] for the flattening rules.
    pub fn from_form(formdata: &HashMap<String, Vec<String>>) -> Self {
        UserOptions {
            data: options_from_form(formdata),
        }
    }

    /// Get a raw option value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|s| s.as_str())
    }

    /// Check whether an option was submitted.
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Whether no options were submitted at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a raw option value, erroring when the field is absent.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::MissingOption(key.to_string()))
    }

    /// Get a boolean option.
    ///
    /// Returns `Ok(None)` when the field is absent and `Err` when the value
    /// is neither "true" nor "false".
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            Some(value) => match parse_bool(value) {
                Some(parsed) => Ok(Some(parsed)),
                None => Err(invalid(key, value, "expected 'true' or 'false'")),
            },
            None => Ok(None),
        }
    }

    /// The raw `repository` field, if one was submitted.
    pub fn repository(&self) -> Option<&str> {
        self.get("repository")
    }

    /// The selected software stack release (`lcg` field).
    pub fn software_stack(&self) -> Option<&str> {
        self.get("lcg")
    }

    /// The selected platform string (`platform` field).
    pub fn platform(&self) -> Option<&str> {
        self.get("platform")
    }

    /// The user environment script (`scriptenv` field).
    pub fn user_script(&self) -> Option<&str> {
        self.get("scriptenv")
    }

    /// The selected Spark cluster (`clusters` field).
    ///
    /// The form's placeholder entry "none" reads as no selection.
    pub fn spark_cluster(&self) -> Option<&str> {
        match self.get("clusters") {
            Some("none") | None => None,
            Some(cluster) => Some(cluster),
        }
    }

    /// The requested core count (`ncores` field).
    pub fn cores(&self) -> Result<Option<u32>> {
        match self.get("ncores") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map(Some)
                .map_err(|_| invalid("ncores", value, "expected a whole number of cores")),
            None => Ok(None),
        }
    }

    /// The requested memory limit in bytes (`memory` field, e.g. "8G").
    pub fn memory_bytes(&self) -> Result<Option<u64>> {
        match self.get("memory") {
            Some(value) => match parse_memory(value) {
                Some(bytes) => Ok(Some(bytes)),
                None => Err(invalid("memory", value, "expected <number><K|M|G>, e.g. 8G")),
            },
            None => Ok(None),
        }
    }

    /// Relative working-directory path for the configured repository.
    ///
    /// Returns the empty string when no `repository` field was submitted;
    /// that is the "no repository configured" signal, not an error. Any
    /// submitted string resolves to a path, see
    /// [`repo_short_name`](crate::repo_short_name).
    pub fn repo_project_path(&self) -> String {
        match self.repository() {
            Some(repository) => project_path(repository),
            None => String::new(),
        }
    }
}

fn invalid(key: &str, value: &str, message: &str) -> Error {
    Error::InvalidOption {
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

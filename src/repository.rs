//! Repository name resolution for notebook working directories.
//!
//! Sessions spawned with a `repository` option get their working directory
//! nested under a fixed projects folder, named after the repository itself.
//! The `repository` field is free-form user input: an HTTPS clone URL, an
//! scp-like SSH spec, or just a bare project name.

use std::path::MAIN_SEPARATOR;
use url::Url;

/// Folder under the user home where repository checkouts live.
pub const SWAN_PROJECTS_FOLDER: &str = "SWAN_projects";

/// Derive the short repository name from a free-form repository spec.
///
/// Trailing `/` and `.git` noise is stripped first, in any combination, then
/// the last path segment is taken. Scheme, host, and nesting depth of the
/// path do not matter; a bare token with no separators is returned as-is.
///
/// # Examples
///
/// ```
/// use swanspawner_config_rs::repo_short_name;
///
/// assert_eq!(repo_short_name("https://github.com/user/myproject.git"), "myproject");
/// assert_eq!(repo_short_name("git@gitlab.cern.ch:swan/analysis.git"), "analysis");
/// assert_eq!(repo_short_name("simple-repo-name"), "simple-repo-name");
/// ```
pub fn repo_short_name(repository: &str) -> String {
    let stripped = strip_repo_suffixes(repository.trim());

    // Proper URLs go through the parser so query strings and redundant
    // slashes in the path don't leak into the name. scp-like specs and bare
    // names are not parseable as URLs and use the plain split below.
    if stripped.contains("://") {
        if let Ok(parsed) = Url::parse(stripped) {
            if let Some(segment) = parsed.path().split('/').filter(|s| !s.is_empty()).last() {
                return segment.to_string();
            }
            // URL with an empty path, e.g. https://github.com
            if let Some(host) = parsed.host_str() {
                return host.to_string();
            }
        }
    }

    stripped
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or(stripped)
        .to_string()
}

/// Relative working-directory path for a repository spec.
///
/// Joins [`SWAN_PROJECTS_FOLDER`] and the short name with the platform path
/// separator.
pub fn project_path(repository: &str) -> String {
    format!(
        "{}{}{}",
        SWAN_PROJECTS_FOLDER,
        MAIN_SEPARATOR,
        repo_short_name(repository)
    )
}

/// Strip any run of trailing `/` and `.git` suffixes until neither applies.
fn strip_repo_suffixes(mut spec: &str) -> &str {
    loop {
        let stripped = spec.trim_end_matches('/');
        let stripped = stripped.strip_suffix(".git").unwrap_or(stripped);
        if stripped == spec {
            return spec;
        }
        spec = stripped;
    }
}

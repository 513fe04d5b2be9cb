//! Session directory resolution.
//!
//! The spawner points the notebook server at a working directory under the
//! user home; these helpers derive the absolute locations.

use crate::options::UserOptions;
use crate::repository::SWAN_PROJECTS_FOLDER;
use std::path::PathBuf;

/// Absolute path of the projects folder (`$HOME/SWAN_projects`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn projects_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SWAN_PROJECTS_FOLDER))
}

/// Absolute working directory for a spawn request.
///
/// The home directory joined with the relative repository path; the home
/// directory itself when no repository is configured.
pub fn notebook_work_dir(options: &UserOptions) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(options.repo_project_path()))
}

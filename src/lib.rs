//! Rust port of the SWAN notebook spawner's user-options handling.
//!
//! This crate covers the configuration side of a spawn request: flattening
//! the options form the hub submits, querying typed option values, and
//! resolving the working-directory path for an optionally configured
//! repository. The spawner itself (containers, mounts, authentication) is
//! out of scope; it calls into this crate with the submitted options and
//! consumes the resolved values.
//!
//! # Quick Start
//!
//! ```
//! use swanspawner_config_rs::UserOptions;
//! use std::collections::HashMap;
//!
//! // The hub submits the form as field -> list of values
//! let mut formdata = HashMap::new();
//! formdata.insert("lcg".to_string(), vec!["LCG_104".to_string()]);
//! formdata.insert(
//!     "repository".to_string(),
//!     vec!["https://github.com/user/myproject.git".to_string()],
//! );
//!
//! let options = UserOptions::from_form(&formdata);
//!
//! assert_eq!(options.software_stack(), Some("LCG_104"));
//!
//! // Working directory for the session, relative to the user home
//! let path = options.repo_project_path();
//! assert!(path.starts_with("SWAN_projects"));
//! assert!(path.ends_with("myproject"));
//! ```
//!
//! # Repository resolution
//!
//! The `repository` form field is free-form user input. All of these resolve
//! to the same working directory:
//!
//! ```text
//! https://github.com/user/myproject      -> SWAN_projects/myproject
//! https://github.com/user/myproject.git/ -> SWAN_projects/myproject
//! git@github.com:user/myproject.git      -> SWAN_projects/myproject
//! ```
//!
//! A request without a `repository` field resolves to the empty string; the
//! session then starts in the user home.

mod error;
mod form;
mod options;
mod paths;
pub mod repository;

// Re-export main types
pub use error::{Error, Result};
pub use form::{options_from_form, parse_bool, parse_memory};
pub use options::UserOptions;
pub use paths::{notebook_work_dir, projects_dir};
pub use repository::{repo_short_name, SWAN_PROJECTS_FOLDER};

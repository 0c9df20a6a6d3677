pub mod config;
pub mod error;
pub mod model;

use std::{path::PathBuf, sync::LazyLock};

use directories::ProjectDirs;

pub use self::error::{Error, Result};

pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PROJECT_NAME: &str = "casdoor-admin";

pub const PROGRAM_NAME: &str = "casdoor-admin";
pub const CONFIG_NAME: &str = "casdoor-admin.yaml";
pub const SESSION_FILE_NAME: &str = "session.yaml";

/// Role every application command requires.
pub const ADMINISTRATOR_ROLE: &str = "administrator";

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("", PROJECT_NAME, PROJECT_NAME));

/// Falls back to the working directory when no home directory can be determined.
pub static PROJECT_CONFIG_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    PROJECT_DIRS.as_ref().map_or_else(|| PathBuf::from("."), |dirs| dirs.config_dir().to_path_buf())
});

pub static PROJECT_DATA_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    PROJECT_DIRS.as_ref().map_or_else(|| PathBuf::from("."), |dirs| dirs.data_dir().to_path_buf())
});

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where `login` stores the operator's access token
    #[serde(default = "SessionConfig::default_file_path")]
    pub file_path: PathBuf,
}

impl SessionConfig {
    #[inline]
    pub fn default_file_path() -> PathBuf {
        casdoor_admin_core::PROJECT_DATA_DIR.join(casdoor_admin_core::SESSION_FILE_NAME)
    }
}

impl Default for SessionConfig {
    fn default() -> Self { Self { file_path: Self::default_file_path() } }
}

mod casdoor;
mod error;
mod session;

use std::path::{Path, PathBuf};

use casdoor_cli_common::config::LogConfig;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{casdoor::CasdoorConfig, error::Error, session::SessionConfig};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub casdoor: CasdoorConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    #[inline]
    pub fn default_path() -> PathBuf {
        [
            casdoor_admin_core::PROJECT_CONFIG_DIR.to_path_buf(),
            PathBuf::from(casdoor_admin_core::CONFIG_NAME),
        ]
        .into_iter()
        .collect()
    }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let data = std::fs::read_to_string(&path)
                .context(error::OpenConfigSnafu { filename: path.as_ref().to_path_buf() })?;

            serde_yaml::from_str(&data)
                .context(error::ParseConfigSnafu { filename: path.as_ref().to_path_buf() })?
        };

        config.log.file_path = config.log.file_path.map(resolve_file_path).transpose()?;
        config.casdoor.certificate_path =
            config.casdoor.certificate_path.map(resolve_file_path).transpose()?;
        config.session.file_path = resolve_file_path(config.session.file_path)?;

        Ok(config)
    }
}

fn resolve_file_path(path: PathBuf) -> Result<PathBuf, Error> {
    path.try_resolve()
        .map(|resolved| resolved.to_path_buf())
        .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
}

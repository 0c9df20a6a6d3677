use std::{
    fmt,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use super::error::{
    CreateSessionDirectorySnafu, ParseSessionSnafu, ReadSessionSnafu, RemoveSessionSnafu, Result,
    SerializeSessionSnafu, WriteSessionSnafu,
};

/// Operator session written by `login`.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Session {
    pub username: String,

    pub access_token: String,

    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("access_token", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// YAML file holding at most one [`Session`].
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[inline]
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self { Self { path: path.into() } }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Session>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(source).context(ReadSessionSnafu { path: self.path.clone() }),
        };

        serde_yaml::from_str(&data).map(Some).context(ParseSessionSnafu { path: self.path.clone() })
    }

    /// Writes `session`, replacing any previous one. The file is private to
    /// the current user on unix.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, session: &Session) -> Result<()> {
        let data = serde_yaml::to_string(session).context(SerializeSessionSnafu)?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(CreateSessionDirectorySnafu { path: parent.to_path_buf() })?;
        }

        let mut options = OpenOptions::new();
        let _ = options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let _ = options.mode(0o600);
        }

        let mut file =
            options.open(&self.path).context(WriteSessionSnafu { path: self.path.clone() })?;
        file.write_all(data.as_bytes()).context(WriteSessionSnafu { path: self.path.clone() })?;

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Removes the session. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be removed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(source).context(RemoveSessionSnafu { path: self.path.clone() }),
        }
    }
}

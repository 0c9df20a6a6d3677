use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Not logged in, run `casdoor-admin login` first"))]
    NotLoggedIn,

    #[snafu(display("Could not read session from {}, error: {source}", path.display()))]
    ReadSession { path: PathBuf, source: std::io::Error },

    #[snafu(display("Could not parse session from {}, error: {source}", path.display()))]
    ParseSession { path: PathBuf, source: serde_yaml::Error },

    #[snafu(display("Could not serialize session, error: {source}"))]
    SerializeSession { source: serde_yaml::Error },

    #[snafu(display("Could not create session directory {}, error: {source}", path.display()))]
    CreateSessionDirectory { path: PathBuf, source: std::io::Error },

    #[snafu(display("Could not write session to {}, error: {source}", path.display()))]
    WriteSession { path: PathBuf, source: std::io::Error },

    #[snafu(display("Could not remove session {}, error: {source}", path.display()))]
    RemoveSession { path: PathBuf, source: std::io::Error },

    #[snafu(display("Could not load token certificate, error: {source}"))]
    LoadCertificate { source: jsonwebtoken::errors::Error },

    #[snafu(display("Session is no longer valid, log in again, error: {source}"))]
    VerifyToken { source: jsonwebtoken::errors::Error },

    #[snafu(display("User `{user}` holds none of the required roles ({required}), granted: [{granted}]"))]
    Forbidden { user: String, required: String, granted: String },
}

impl Error {
    /// Authenticated, but without a required role.
    #[inline]
    #[must_use]
    pub const fn is_forbidden(&self) -> bool { matches!(self, Self::Forbidden { .. }) }

    /// Failures writing or removing the local session file.
    #[inline]
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::SerializeSession { .. }
                | Self::CreateSessionDirectory { .. }
                | Self::WriteSession { .. }
                | Self::RemoveSession { .. }
        )
    }
}

use snafu::Snafu;

use crate::{casdoor_client, service, session};

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of command failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotAuthenticated,
    Forbidden,
    Validation,
    Provider,
    Io,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Session { source: session::Error },

    #[snafu(display("Required flags are missing: {}", flags.join(", ")))]
    MissingFlags { flags: Vec<&'static str> },

    #[snafu(display("Could not connect to Casdoor, error: {source}"))]
    ConnectProvider { source: casdoor_client::Error },

    #[snafu(display("{source}"))]
    Provider { source: service::Error },

    #[snafu(display("Failed to log in as `{username}`, error: {source}"))]
    Login { username: String, source: casdoor_client::Error },

    #[snafu(display("Casdoor issued a token that does not verify, error: {source}"))]
    VerifyIssuedToken { source: session::Error },

    #[snafu(display("{source}"))]
    SaveSession { source: session::Error },

    #[snafu(display("{source}"))]
    ClearSession { source: session::Error },
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Session { source } if source.is_forbidden() => ErrorKind::Forbidden,
            Self::Session { source } if source.is_storage() => ErrorKind::Io,
            Self::Session { .. } | Self::VerifyIssuedToken { .. } => ErrorKind::NotAuthenticated,
            Self::Login { source: casdoor_client::Error::Rejected { .. }, .. } => {
                ErrorKind::NotAuthenticated
            }
            Self::MissingFlags { .. } => ErrorKind::Validation,
            Self::ConnectProvider { .. } | Self::Provider { .. } | Self::Login { .. } => {
                ErrorKind::Provider
            }
            Self::SaveSession { .. } | Self::ClearSession { .. } => ErrorKind::Io,
        }
    }
}

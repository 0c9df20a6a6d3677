use casdoor_admin_operator::{casdoor_client, command, session, ErrorKind};
use snafu::Snafu;

use crate::config;

/// Result type alias for the CLI.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for the CLI.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Command { source: command::Error },

    #[snafu(display("{source}"))]
    Config { source: config::Error },

    #[snafu(display("Invalid Casdoor configuration, error: {source}"))]
    ProviderClient { source: casdoor_client::Error },

    #[snafu(display("Invalid token certificate, error: {source}"))]
    TokenCertificate { source: session::Error },

    #[snafu(display("Could not initialize tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },

    #[snafu(display("Could not read password, error: {source}"))]
    ReadPassword { source: std::io::Error },

    #[snafu(display("Could not serialize output as JSON, error: {source}"))]
    SerializeJson { source: serde_json::Error },

    #[snafu(display("Could not serialize output as YAML, error: {source}"))]
    SerializeYaml { source: serde_yaml::Error },

    #[snafu(display("Could not write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },
}

impl From<config::Error> for Error {
    fn from(source: config::Error) -> Self { Self::Config { source } }
}

impl From<command::Error> for Error {
    fn from(source: command::Error) -> Self { Self::Command { source } }
}

pub trait CommandError {
    fn exit_code(&self) -> exitcode::ExitCode;
}

impl CommandError for Error {
    fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Command { source } => match source.kind() {
                ErrorKind::NotAuthenticated | ErrorKind::Forbidden => exitcode::NOPERM,
                ErrorKind::Validation => exitcode::USAGE,
                ErrorKind::Provider => exitcode::UNAVAILABLE,
                ErrorKind::Io => exitcode::IOERR,
            },
            Self::Config { .. } | Self::ProviderClient { .. } | Self::TokenCertificate { .. } => {
                exitcode::CONFIG
            }
            Self::InitializeTokioRuntime { .. }
            | Self::ReadPassword { .. }
            | Self::WriteStdout { .. } => exitcode::IOERR,
            Self::SerializeJson { .. } | Self::SerializeYaml { .. } => exitcode::SOFTWARE,
        }
    }
}

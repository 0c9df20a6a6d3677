use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not open config from {}, error: {source}", filename.display()))]
    OpenConfig { filename: PathBuf, source: std::io::Error },

    #[snafu(display("Could not parse config from {}, error: {source}", filename.display()))]
    ParseConfig { filename: PathBuf, source: serde_yaml::Error },

    #[snafu(display("Could not resolve file path {}, error: {source}", file_path.display()))]
    ResolveFilePath { file_path: PathBuf, source: std::io::Error },

    #[snafu(display("Could not read file {}, error: {source}", path.display()))]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[snafu(display("Invalid Casdoor endpoint `{endpoint}`: {message}"))]
    InvalidEndpoint { endpoint: String, message: String },

    #[snafu(display("`casdoor.client_id` must not be empty"))]
    EmptyClientId,

    #[snafu(display("`casdoor.client_secret` must not be empty"))]
    EmptyClientSecret,

    #[snafu(display(
        "A token certificate is required, set `casdoor.certificate` or `casdoor.certificate_path`"
    ))]
    MissingCertificate,
}

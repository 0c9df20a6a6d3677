use std::path::PathBuf;

use casdoor_admin_core::config::ProviderConfig;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use super::error::{self, Error};

#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CasdoorConfig {
    /// Casdoor server URL (e.g., <http://localhost:8000>)
    #[serde(default = "CasdoorConfig::default_endpoint")]
    pub endpoint: String,

    /// Client ID of the application this tool authenticates as
    #[serde(default)]
    pub client_id: String,

    /// Client secret of the application this tool authenticates as
    #[serde(default)]
    pub client_secret: String,

    /// PEM certificate that signs access tokens, inline
    #[serde(default)]
    pub certificate: Option<String>,

    /// PEM certificate that signs access tokens, read from a file
    #[serde(default)]
    pub certificate_path: Option<PathBuf>,

    #[serde(default = "CasdoorConfig::default_organization_name")]
    pub organization_name: String,

    #[serde(default = "CasdoorConfig::default_application_name")]
    pub application_name: String,

    /// Enable TLS certificate verification
    #[serde(default = "CasdoorConfig::default_verify_ssl")]
    pub verify_ssl: bool,
}

impl CasdoorConfig {
    #[inline]
    pub fn default_endpoint() -> String { "http://localhost:8000".to_string() }

    #[inline]
    pub fn default_organization_name() -> String { "built-in".to_string() }

    #[inline]
    pub fn default_application_name() -> String { "app-built-in".to_string() }

    #[inline]
    pub const fn default_verify_ssl() -> bool { true }

    /// Validate the section and load the certificate.
    pub fn resolve(self) -> Result<ProviderConfig, Error> {
        let Self {
            endpoint,
            client_id,
            client_secret,
            certificate,
            certificate_path,
            organization_name,
            application_name,
            verify_ssl,
        } = self;

        let endpoint = endpoint.trim().to_string();
        if endpoint.is_empty() {
            return Err(Error::InvalidEndpoint { endpoint, message: "empty".to_string() });
        }
        let url = Url::parse(&endpoint).map_err(|err| Error::InvalidEndpoint {
            endpoint: endpoint.clone(),
            message: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpoint {
                endpoint,
                message: "expected an http(s) URL".to_string(),
            });
        }

        if client_id.trim().is_empty() {
            return Err(Error::EmptyClientId);
        }
        if client_secret.trim().is_empty() {
            return Err(Error::EmptyClientSecret);
        }

        let certificate = match (certificate, certificate_path) {
            (Some(certificate), _) if !certificate.trim().is_empty() => certificate,
            (_, Some(path)) => std::fs::read_to_string(&path)
                .context(error::ReadFileSnafu { path: path.clone() })?,
            _ => return Err(Error::MissingCertificate),
        };
        if certificate.trim().is_empty() {
            return Err(Error::MissingCertificate);
        }

        Ok(ProviderConfig {
            endpoint,
            client_id,
            client_secret,
            certificate,
            organization_name,
            application_name,
            verify_ssl,
        })
    }
}

impl Default for CasdoorConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            client_id: String::new(),
            client_secret: String::new(),
            certificate: None,
            certificate_path: None,
            organization_name: Self::default_organization_name(),
            application_name: Self::default_application_name(),
            verify_ssl: Self::default_verify_ssl(),
        }
    }
}

impl std::fmt::Debug for CasdoorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CasdoorConfig")
            .field("endpoint", &self.endpoint)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("certificate_path", &self.certificate_path)
            .field("organization_name", &self.organization_name)
            .field("application_name", &self.application_name)
            .field("verify_ssl", &self.verify_ssl)
            .finish_non_exhaustive()
    }
}

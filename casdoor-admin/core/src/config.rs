use std::fmt;

/// Identity of the calling application, used to bootstrap the provider client.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub endpoint: String,

    pub client_id: String,

    pub client_secret: String,

    /// PEM certificate whose key signs operator access tokens.
    pub certificate: String,

    pub organization_name: String,

    pub application_name: String,

    pub verify_ssl: bool,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("certificate", &format_args!("<{} bytes>", self.certificate.len()))
            .field("organization_name", &self.organization_name)
            .field("application_name", &self.application_name)
            .field("verify_ssl", &self.verify_ssl)
            .finish()
    }
}

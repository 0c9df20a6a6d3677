use std::num::NonZeroU32;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub const DEFAULT_OWNER: &str = "admin";
pub const DEFAULT_ORGANIZATION: &str = "built-in";
pub const DEFAULT_TOKEN_FORMAT: &str = "JWT";
pub const DEFAULT_CERTIFICATE: &str = "cert-built-in";
pub const DEFAULT_EXPIRE_IN_HOURS: NonZeroU32 = match NonZeroU32::new(168) {
    Some(hours) => hours,
    None => NonZeroU32::MIN,
};
pub const DEFAULT_GRANT_TYPES: [&str; 3] = ["authorization_code", "implicit", "refresh_token"];
pub const DEFAULT_RESPONSE_TYPES: [&str; 3] = ["code", "token", "id_token"];
pub const DEFAULT_SCOPES: [&str; 3] = ["openid", "profile", "email"];

/// Sign-in features toggled per application.
// SAFETY: one flag per provider switch.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FeatureFlags {
    pub enable_password: bool,
    pub enable_sign_up: bool,
    pub enable_signin_session: bool,
    pub enable_code_signin: bool,
    pub enable_saml_compress: bool,
    pub enable_auto_signin: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_password: true,
            enable_sign_up: false,
            enable_signin_session: false,
            enable_code_signin: false,
            enable_saml_compress: false,
            enable_auto_signin: false,
        }
    }
}

/// An OIDC client registration as the tool sees it.
///
/// `owner` and `name` together identify the application at the provider.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Application {
    pub owner: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub organization: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uris: Vec<String>,
    pub token_format: String,
    pub expire_in_hours: NonZeroU32,
    pub refresh_expire_in_hours: NonZeroU32,
    pub features: FeatureFlags,
    pub cert: String,
    pub grant_types: IndexSet<String>,
    pub response_types: IndexSet<String>,
    pub scopes: IndexSet<String>,
}

impl Application {
    /// Creates an application carrying the fixed registration policy.
    ///
    /// The display name mirrors `name` and the organization is
    /// [`DEFAULT_ORGANIZATION`] until overridden.
    #[must_use]
    pub fn new<N, I, S>(name: N, client_id: I, client_secret: S) -> Self
    where
        N: Into<String>,
        I: Into<String>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            owner: DEFAULT_OWNER.to_string(),
            display_name: name.clone(),
            name,
            description: String::new(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uris: Vec::new(),
            token_format: DEFAULT_TOKEN_FORMAT.to_string(),
            expire_in_hours: DEFAULT_EXPIRE_IN_HOURS,
            refresh_expire_in_hours: DEFAULT_EXPIRE_IN_HOURS,
            features: FeatureFlags::default(),
            cert: DEFAULT_CERTIFICATE.to_string(),
            grant_types: DEFAULT_GRANT_TYPES.into_iter().map(String::from).collect(),
            response_types: DEFAULT_RESPONSE_TYPES.into_iter().map(String::from).collect(),
            scopes: DEFAULT_SCOPES.into_iter().map(String::from).collect(),
        }
    }

    #[must_use]
    pub fn with_organization<S: Into<String>>(mut self, organization: S) -> Self {
        self.organization = organization.into();
        self
    }

    #[must_use]
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_redirect_uris<I, S>(mut self, redirect_uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.redirect_uris = redirect_uris.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> ApplicationId {
        ApplicationId { owner: self.owner.clone(), name: self.name.clone() }
    }
}

/// Provider-side key of an application.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct ApplicationId {
    pub owner: String,
    pub name: String,
}

impl ApplicationId {
    #[must_use]
    pub fn new<O: Into<String>, N: Into<String>>(owner: O, name: N) -> Self {
        Self { owner: owner.into(), name: name.into() }
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Row shown by `applications list`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Tabled)]
pub struct ApplicationSummary {
    #[tabled(rename = "Name")]
    pub name: String,

    #[tabled(rename = "Display Name")]
    pub display_name: String,

    #[tabled(rename = "Organization")]
    pub organization: String,

    #[tabled(rename = "Client ID")]
    pub client_id: String,

    #[tabled(rename = "Description")]
    pub description: String,
}

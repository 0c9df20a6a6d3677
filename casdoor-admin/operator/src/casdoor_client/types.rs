use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Application as Casdoor's REST API reads and writes it.
///
/// Fields Casdoor returns beyond these are ignored.
// SAFETY: mirrors the provider's JSON, which carries one bool per feature.
#[allow(clippy::struct_excessive_bools)]
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CasdoorApplication {
    pub owner: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub organization: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde_as(as = "DefaultOnNull")]
    pub redirect_uris: Vec<String>,
    pub token_format: String,
    pub expire_in_hours: i64,
    pub refresh_expire_in_hours: i64,
    pub enable_password: bool,
    pub enable_sign_up: bool,
    pub enable_signin_session: bool,
    pub enable_code_signin: bool,
    pub enable_saml_compress: bool,
    pub enable_auto_signin: bool,
    pub cert: String,
    #[serde_as(as = "DefaultOnNull")]
    pub grant_types: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub response_types: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub scopes: Vec<String>,
}

/// Body of `delete-application`.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ApplicationKey<'a> {
    pub owner: &'a str,
    pub name: &'a str,
}

/// Envelope wrapping every `/api/*` response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub status: String,

    #[serde(default)]
    pub msg: String,

    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiResponse {
    pub const STATUS_OK: &'static str = "ok";

    pub const AFFECTED: &'static str = "Affected";
}

/// Token endpoint answer, successful or not.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,

    #[serde(default)]
    pub token_type: String,

    #[serde(default)]
    pub expires_in: i64,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("error", &self.error)
            .field("error_description", &self.error_description)
            .finish()
    }
}

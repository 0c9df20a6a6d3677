pub mod error;
mod types;

use casdoor_admin_core::{config::ProviderConfig, model::ApplicationId};
use reqwest::Url;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

pub use self::{
    error::{Error, Result},
    types::{ApplicationKey, CasdoorApplication, TokenResponse},
};
use self::{
    error::{
        BuildHttpClientSnafu, DecodeDataSnafu, DecodeResponseSnafu, SendRequestSnafu,
        UnexpectedStatusSnafu,
    },
    types::ApiResponse,
};

const GET_APPLICATIONS: &str = "get-applications";
const ADD_APPLICATION: &str = "add-application";
const DELETE_APPLICATION: &str = "delete-application";
const ACCESS_TOKEN: &str = "login/oauth/access_token";

/// Application operations the provider exposes.
pub trait ApplicationApi {
    /// Lists every application owned by `owner`, in provider order.
    async fn get_applications(&self, owner: &str) -> Result<Vec<CasdoorApplication>>;

    async fn add_application(&self, application: &CasdoorApplication) -> Result<()>;

    /// Only `owner` and `name` reach the provider.
    async fn delete_application(&self, id: &ApplicationId) -> Result<()>;
}

/// Minimal Casdoor REST client authenticating as the configured application.
#[derive(Clone, Debug)]
pub struct CasdoorClient {
    http: reqwest::Client,
    endpoint: Url,
    client_id: String,
    client_secret: String,
}

impl CasdoorClient {
    /// Create a new Casdoor client
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute URL or the HTTP
    /// client cannot be built
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let endpoint = normalize_endpoint(&config.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if !config.verify_ssl {
            tracing::warn!("TLS certificate verification is disabled for {endpoint}");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build().context(BuildHttpClientSnafu)?;

        Ok(Self {
            http,
            endpoint,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn endpoint(&self) -> &Url { &self.endpoint }

    /// Exchange operator credentials for an access token (OAuth2 password grant)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Casdoor refuses the grant
    pub async fn password_grant(&self, username: &str, password: &str) -> Result<TokenResponse> {
        let url = self.api_url(ACCESS_TOKEN)?;
        tracing::debug!(%url, username, "requesting access token");

        let response = self
            .http
            .post(url)
            .form(&[
                ("grant_type", "password"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("username", username),
                ("password", password),
            ])
            .send()
            .await
            .context(SendRequestSnafu { action: ACCESS_TOKEN })?;

        // Casdoor reports grant failures in the body, sometimes with a 4xx status.
        let token: TokenResponse =
            response.json().await.context(DecodeResponseSnafu { action: ACCESS_TOKEN })?;

        if let Some(error) = token.error.as_deref().filter(|error| !error.is_empty()) {
            let message = token
                .error_description
                .as_deref()
                .filter(|description| !description.is_empty())
                .map_or_else(|| error.to_string(), |description| format!("{error}: {description}"));
            return Err(Error::Rejected { action: ACCESS_TOKEN, message });
        }
        if token.access_token.is_empty() {
            return Err(Error::Rejected {
                action: ACCESS_TOKEN,
                message: "no access token in response".to_string(),
            });
        }

        Ok(token)
    }

    fn api_url(&self, action: &'static str) -> Result<Url> {
        self.endpoint.join(&format!("api/{action}")).map_err(|err| Error::InvalidEndpoint {
            endpoint: self.endpoint.to_string(),
            message: err.to_string(),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        action: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .send()
            .await
            .context(SendRequestSnafu { action })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return UnexpectedStatusSnafu { action, status: status.as_u16(), body }.fail();
        }

        let ApiResponse { status, msg, data } =
            response.json().await.context(DecodeResponseSnafu { action })?;
        if status != ApiResponse::STATUS_OK {
            tracing::debug!(action, %status, %msg, "Casdoor rejected request");
            return Err(Error::Rejected { action, message: msg });
        }

        serde_json::from_value(data).context(DecodeDataSnafu { action })
    }

    async fn modify(
        &self,
        action: &'static str,
        id: &ApplicationId,
        request: reqwest::RequestBuilder,
    ) -> Result<()> {
        let affected: String =
            self.call(action, request.query(&[("id", id.to_string())])).await?;

        if affected == ApiResponse::AFFECTED {
            Ok(())
        } else {
            Err(Error::Unaffected { action, id: id.to_string() })
        }
    }
}

impl ApplicationApi for CasdoorClient {
    async fn get_applications(&self, owner: &str) -> Result<Vec<CasdoorApplication>> {
        let url = self.api_url(GET_APPLICATIONS)?;
        let applications: Option<Vec<CasdoorApplication>> =
            self.call(GET_APPLICATIONS, self.http.get(url).query(&[("owner", owner)])).await?;
        Ok(applications.unwrap_or_default())
    }

    async fn add_application(&self, application: &CasdoorApplication) -> Result<()> {
        let url = self.api_url(ADD_APPLICATION)?;
        let id = ApplicationId::new(application.owner.as_str(), application.name.as_str());
        self.modify(ADD_APPLICATION, &id, self.http.post(url).json(application)).await
    }

    async fn delete_application(&self, id: &ApplicationId) -> Result<()> {
        let url = self.api_url(DELETE_APPLICATION)?;
        let key = ApplicationKey { owner: &id.owner, name: &id.name };
        self.modify(DELETE_APPLICATION, id, self.http.post(url).json(&key)).await
    }
}

/// Parses the endpoint and makes sure relative joins keep its path.
fn normalize_endpoint(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint.trim()).map_err(|err| Error::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            message: "expected an http(s) URL".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

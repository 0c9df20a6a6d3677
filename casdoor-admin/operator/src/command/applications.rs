use casdoor_admin_core::{
    config::ProviderConfig,
    model::{Application, RoleSet, DEFAULT_ORGANIZATION},
};
use clap::Args;
use snafu::ResultExt;

use super::{
    error::{ConnectProviderSnafu, Error, ProviderSnafu, Result, SessionSnafu},
    Outcome,
};
use crate::{
    casdoor_client::{self, ApplicationApi},
    service::ApplicationManager,
    session::SessionGate,
};

#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct AddApplicationParams {
    #[arg(short = 'n', long = "name", default_value_t, help = "Name of the application")]
    pub name: String,

    #[arg(short = 'c', long = "client-id", default_value_t, help = "OAuth2 client ID")]
    pub client_id: String,

    #[arg(short = 's', long = "client-secret", default_value_t, help = "OAuth2 client secret")]
    pub client_secret: String,

    #[arg(
        short = 'r',
        long = "redirect-uris",
        value_delimiter = ',',
        help = "Comma-separated list of allowed redirect URIs"
    )]
    pub redirect_uris: Vec<String>,

    #[arg(
        short = 'o',
        long = "organization",
        default_value = DEFAULT_ORGANIZATION,
        help = "Organization the application belongs to"
    )]
    pub organization: String,

    #[arg(short = 'D', long = "description", default_value_t, help = "Description of the application")]
    pub description: String,
}

impl Default for AddApplicationParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uris: Vec::new(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            description: String::new(),
        }
    }
}

impl AddApplicationParams {
    fn missing_flags(&self) -> Vec<&'static str> {
        [
            ("--name", &self.name),
            ("--client-id", &self.client_id),
            ("--client-secret", &self.client_secret),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(flag, _)| flag)
        .collect()
    }

    fn into_application(self) -> Application {
        let Self { name, client_id, client_secret, redirect_uris, organization, description } =
            self;
        let redirect_uris = redirect_uris
            .into_iter()
            .map(|uri| uri.trim().to_string())
            .filter(|uri| !uri.is_empty())
            .collect::<Vec<_>>();

        Application::new(name.trim(), client_id.trim(), client_secret)
            .with_organization(organization)
            .with_description(description)
            .with_redirect_uris(redirect_uris)
    }
}

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteApplicationParams {
    #[arg(short = 'n', long = "name", default_value_t, help = "Name of the application")]
    pub name: String,
}

/// Handlers for `applications list|add|delete`.
///
/// Every handler checks the operator's roles first, then its flags, and only
/// then connects to the provider through `connect`.
pub struct ApplicationCommands<G, F> {
    gate: G,
    connect: F,
    required_roles: RoleSet,
}

impl<G, F, C> ApplicationCommands<G, F>
where
    G: SessionGate,
    F: Fn(&ProviderConfig) -> casdoor_client::Result<C>,
    C: ApplicationApi,
{
    #[inline]
    pub fn new(gate: G, connect: F) -> Self {
        Self { gate, connect, required_roles: RoleSet::administrator() }
    }

    /// # Errors
    ///
    /// Returns an error if the operator is not authorized or the provider
    /// request fails
    pub async fn list(&self) -> Result<Outcome> {
        let config = self.authorize()?;
        let manager = self.manager(&config)?;

        let applications = manager.get_applications().await.context(ProviderSnafu)?;
        Ok(Outcome::Listed(applications))
    }

    /// # Errors
    ///
    /// Returns an error if the operator is not authorized, a required flag is
    /// blank or the provider rejects the application
    pub async fn add(&self, params: AddApplicationParams) -> Result<Outcome> {
        let config = self.authorize()?;

        let missing = params.missing_flags();
        if !missing.is_empty() {
            return Err(Error::MissingFlags { flags: missing });
        }

        let application = params.into_application();
        let manager = self.manager(&config)?;
        manager.add_application(&application).await.context(ProviderSnafu)?;

        Ok(Outcome::Added { name: application.name })
    }

    /// # Errors
    ///
    /// Returns an error if the operator is not authorized, the name is blank
    /// or the provider cannot delete the application
    pub async fn delete(&self, params: DeleteApplicationParams) -> Result<Outcome> {
        let config = self.authorize()?;

        if is_blank(&params.name) {
            return Err(Error::MissingFlags { flags: vec!["--name"] });
        }

        // Only owner and name are used; the credentials are placeholders.
        let application = Application::new(params.name.trim(), "", "");
        let manager = self.manager(&config)?;
        manager.delete_application(&application).await.context(ProviderSnafu)?;

        Ok(Outcome::Deleted { name: application.name })
    }

    fn authorize(&self) -> Result<ProviderConfig> {
        self.gate.check_logged_in_and_get_config(&self.required_roles).context(SessionSnafu)
    }

    fn manager(&self, config: &ProviderConfig) -> Result<ApplicationManager<C>> {
        let client = (self.connect)(config).context(ConnectProviderSnafu)?;
        Ok(ApplicationManager::new(client))
    }
}

#[inline]
fn is_blank(value: &str) -> bool { value.trim().is_empty() }

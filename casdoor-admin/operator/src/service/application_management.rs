use casdoor_admin_core::model::{Application, ApplicationSummary, DEFAULT_OWNER};
use snafu::ResultExt;

use super::error::{AddApplicationSnafu, DeleteApplicationSnafu, GetApplicationsSnafu, Result};
use crate::casdoor_client::{ApplicationApi, CasdoorApplication};

/// Translates between [`Application`] records and the provider's shapes
#[derive(Clone, Debug)]
pub struct ApplicationManager<C> {
    client: C,
}

impl<C> ApplicationManager<C>
where
    C: ApplicationApi,
{
    #[inline]
    #[must_use]
    pub const fn new(client: C) -> Self { Self { client } }

    /// Fetch all applications of the tenant as summaries, in provider order
    ///
    /// # Errors
    ///
    /// Returns an error if the provider request fails
    pub async fn get_applications(&self) -> Result<Vec<ApplicationSummary>> {
        let applications = self
            .client
            .get_applications(DEFAULT_OWNER)
            .await
            .context(GetApplicationsSnafu)?;

        tracing::debug!(count = applications.len(), "fetched applications");

        Ok(applications.into_iter().map(summarize).collect())
    }

    /// Register `application` with every field, flag and set it carries
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the application
    pub async fn add_application(&self, application: &Application) -> Result<()> {
        let request = to_provider_application(application);

        self.client
            .add_application(&request)
            .await
            .context(AddApplicationSnafu { id: application.id() })?;

        tracing::info!(id = %application.id(), "application added");
        Ok(())
    }

    /// Delete the application identified by `application.owner` and
    /// `application.name`; other fields are ignored
    ///
    /// # Errors
    ///
    /// Returns an error if the application does not exist or the provider
    /// rejects the request
    pub async fn delete_application(&self, application: &Application) -> Result<()> {
        let id = application.id();

        self.client
            .delete_application(&id)
            .await
            .with_context(|_| DeleteApplicationSnafu { id: id.clone() })?;

        tracing::info!(%id, "application deleted");
        Ok(())
    }
}

fn summarize(application: CasdoorApplication) -> ApplicationSummary {
    let CasdoorApplication { name, display_name, organization, client_id, description, .. } =
        application;
    ApplicationSummary { name, display_name, organization, client_id, description }
}

fn to_provider_application(application: &Application) -> CasdoorApplication {
    let Application {
        owner,
        name,
        display_name,
        description,
        organization,
        client_id,
        client_secret,
        redirect_uris,
        token_format,
        expire_in_hours,
        refresh_expire_in_hours,
        features,
        cert,
        grant_types,
        response_types,
        scopes,
    } = application;

    CasdoorApplication {
        owner: owner.clone(),
        name: name.clone(),
        display_name: display_name.clone(),
        description: description.clone(),
        organization: organization.clone(),
        client_id: client_id.clone(),
        client_secret: client_secret.clone(),
        redirect_uris: redirect_uris.clone(),
        token_format: token_format.clone(),
        expire_in_hours: i64::from(expire_in_hours.get()),
        refresh_expire_in_hours: i64::from(refresh_expire_in_hours.get()),
        enable_password: features.enable_password,
        enable_sign_up: features.enable_sign_up,
        enable_signin_session: features.enable_signin_session,
        enable_code_signin: features.enable_code_signin,
        enable_saml_compress: features.enable_saml_compress,
        enable_auto_signin: features.enable_auto_signin,
        cert: cert.clone(),
        grant_types: grant_types.iter().cloned().collect(),
        response_types: response_types.iter().cloned().collect(),
        scopes: scopes.iter().cloned().collect(),
    }
}

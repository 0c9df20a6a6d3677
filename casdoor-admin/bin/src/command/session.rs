use casdoor_admin_operator::{
    command::{self, LoginParams},
    CasdoorClient, SessionStore, TokenVerifier,
};
use snafu::ResultExt;

use super::runtime;
use crate::{
    config::Config,
    error::{self, Result},
    output::{self, OutputFormat},
};

pub fn login(Config { casdoor, session, .. }: Config, mut params: LoginParams) -> Result<()> {
    let provider = casdoor.resolve()?;
    let verifier = TokenVerifier::new(&provider.certificate, &provider.client_id)
        .context(error::TokenCertificateSnafu)?;
    let client = CasdoorClient::new(&provider).context(error::ProviderClientSnafu)?;
    let store = SessionStore::new(session.file_path);

    if params.password.is_empty() && !params.username.trim().is_empty() {
        params.password = rpassword::prompt_password(format!("Password for {}: ", params.username))
            .context(error::ReadPasswordSnafu)?;
    }

    let outcome = runtime()?.block_on(command::login(&client, &verifier, &store, params))?;
    output::render(&outcome, OutputFormat::Table)
}

pub fn logout(config: &Config) -> Result<()> {
    let outcome = command::logout(&SessionStore::new(config.session.file_path.clone()))?;
    output::render(&outcome, OutputFormat::Table)
}

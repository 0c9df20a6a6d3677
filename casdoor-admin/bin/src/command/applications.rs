use casdoor_admin_operator::{
    ApplicationCommands, CasdoorClient, LocalSessionGate, SessionStore, TokenVerifier,
};
use snafu::ResultExt;

use super::runtime;
use crate::{
    cli::ApplicationsCommand,
    config::Config,
    error::{self, Result},
    output::{self, OutputFormat},
};

pub fn run_applications(
    Config { casdoor, session, .. }: Config,
    command: ApplicationsCommand,
    format: OutputFormat,
) -> Result<()> {
    let provider = casdoor.resolve()?;
    let verifier = TokenVerifier::new(&provider.certificate, &provider.client_id)
        .context(error::TokenCertificateSnafu)?;
    tracing::debug!(endpoint = %provider.endpoint, "using Casdoor");

    let gate = LocalSessionGate::new(SessionStore::new(session.file_path), verifier, provider);
    let commands = ApplicationCommands::new(gate, CasdoorClient::new);

    let outcome = runtime()?.block_on(async {
        match command {
            ApplicationsCommand::List => commands.list().await,
            ApplicationsCommand::Add(params) => commands.add(params).await,
            ApplicationsCommand::Delete(params) => commands.delete(params).await,
        }
    })?;

    output::render(&outcome, format)
}

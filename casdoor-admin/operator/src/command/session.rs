use chrono::Utc;
use clap::Args;
use snafu::ResultExt;

use super::{
    error::{ClearSessionSnafu, Error, LoginSnafu, Result, SaveSessionSnafu, VerifyIssuedTokenSnafu},
    Outcome,
};
use crate::{
    casdoor_client::CasdoorClient,
    session::{Session, SessionStore, TokenVerifier},
};

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginParams {
    #[arg(short = 'u', long = "username", default_value_t, help = "Casdoor user name")]
    pub username: String,

    #[arg(
        short = 'p',
        long = "password",
        env = "CASDOOR_ADMIN_PASSWORD",
        hide_env_values = true,
        default_value_t,
        help = "Casdoor password"
    )]
    pub password: String,
}

/// Exchange the operator's credentials for a token and store it as the
/// current session.
///
/// # Errors
///
/// Returns an error if Casdoor refuses the credentials, the issued token does
/// not verify or the session cannot be written
pub async fn login(
    client: &CasdoorClient,
    verifier: &TokenVerifier,
    store: &SessionStore,
    LoginParams { username, password }: LoginParams,
) -> Result<Outcome> {
    let missing = [("--username", &username), ("--password", &password)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(flag, _)| flag)
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(Error::MissingFlags { flags: missing });
    }

    let token = client
        .password_grant(&username, &password)
        .await
        .with_context(|_| LoginSnafu { username: username.clone() })?;

    let claims = verifier.verify(&token.access_token).context(VerifyIssuedTokenSnafu)?;

    store
        .save(&Session {
            username: username.clone(),
            access_token: token.access_token,
            created_at: Utc::now(),
        })
        .context(SaveSessionSnafu)?;

    tracing::info!(%username, path = %store.path().display(), "logged in");

    Ok(Outcome::LoggedIn {
        username,
        roles: claims.role_names().map(ToString::to_string).collect(),
    })
}

/// Forget the current session, if any.
///
/// # Errors
///
/// Returns an error if an existing session file cannot be removed
pub fn logout(store: &SessionStore) -> Result<Outcome> {
    let had_session = store.clear().context(ClearSessionSnafu)?;
    Ok(Outcome::LoggedOut { had_session })
}

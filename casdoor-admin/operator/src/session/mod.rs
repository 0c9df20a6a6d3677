mod claims;
pub mod error;
mod store;
mod verifier;

use casdoor_admin_core::{config::ProviderConfig, model::RoleSet};

pub use self::{
    claims::{ClaimRole, Claims},
    error::{Error, Result},
    store::{Session, SessionStore},
    verifier::TokenVerifier,
};

/// Decides whether the current operator may run a command.
pub trait SessionGate {
    /// Resolve the operator session and hand out the provider configuration
    /// when the operator holds at least one of `required_roles`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] when no required role is held, and any
    /// other variant when no valid session exists.
    fn check_logged_in_and_get_config(&self, required_roles: &RoleSet) -> Result<ProviderConfig>;
}

/// Gate backed by the session file and the provider's token certificate.
#[derive(Clone, Debug)]
pub struct LocalSessionGate {
    store: SessionStore,
    verifier: TokenVerifier,
    config: ProviderConfig,
}

impl LocalSessionGate {
    #[inline]
    #[must_use]
    pub const fn new(store: SessionStore, verifier: TokenVerifier, config: ProviderConfig) -> Self {
        Self { store, verifier, config }
    }

    /// Verify the stored session and return its claims.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no session or its token does not verify.
    pub fn current_claims(&self) -> Result<Claims> {
        let session = self.store.load()?.ok_or(Error::NotLoggedIn)?;
        self.verifier.verify(&session.access_token)
    }
}

impl SessionGate for LocalSessionGate {
    fn check_logged_in_and_get_config(&self, required_roles: &RoleSet) -> Result<ProviderConfig> {
        let claims = self.current_claims()?;
        authorize(&claims, required_roles)?;
        Ok(self.config.clone())
    }
}

/// Succeeds iff the operator's roles intersect `required_roles`.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] otherwise.
pub fn authorize(claims: &Claims, required_roles: &RoleSet) -> Result<()> {
    if required_roles.is_satisfied_by(claims.role_names()) {
        tracing::debug!(user = %claims.name, required = %required_roles, "operator authorized");
        Ok(())
    } else {
        tracing::warn!(user = %claims.name, required = %required_roles, "operator lacks required role");
        Err(Error::Forbidden {
            user: claims.name.clone(),
            required: required_roles.to_string(),
            granted: claims.role_names().collect::<Vec<_>>().join(", "),
        })
    }
}

use std::fmt;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use snafu::ResultExt;

use super::{
    error::{LoadCertificateSnafu, Result, VerifyTokenSnafu},
    Claims,
};

/// Verifies operator access tokens against the provider's signing certificate
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// `certificate` is the PEM certificate (or public key) of the signing
    /// key; `audience` is the client ID tokens must be issued to.
    ///
    /// # Errors
    ///
    /// Returns an error if the certificate is not a valid RSA PEM
    pub fn new(certificate: &str, audience: &str) -> Result<Self> {
        let key = DecodingKey::from_rsa_pem(certificate.as_bytes()).context(LoadCertificateSnafu)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "aud"]);

        Ok(Self { key, validation })
    }

    /// # Errors
    ///
    /// Returns an error if the signature, audience or expiry check fails
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.key, &self.validation).context(VerifyTokenSnafu)?;
        Ok(data.claims)
    }
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier").field("validation", &self.validation).finish_non_exhaustive()
    }
}

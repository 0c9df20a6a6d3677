mod application;
mod role;

pub use self::{
    application::{
        Application, ApplicationId, ApplicationSummary, FeatureFlags, DEFAULT_CERTIFICATE,
        DEFAULT_EXPIRE_IN_HOURS, DEFAULT_GRANT_TYPES, DEFAULT_ORGANIZATION, DEFAULT_OWNER,
        DEFAULT_RESPONSE_TYPES, DEFAULT_SCOPES, DEFAULT_TOKEN_FORMAT,
    },
    role::RoleSet,
};

mod applications;
pub mod error;
mod session;

use casdoor_admin_core::model::ApplicationSummary;

pub use self::{
    applications::{AddApplicationParams, ApplicationCommands, DeleteApplicationParams},
    error::{Error, ErrorKind, Result},
    session::{login, logout, LoginParams},
};

/// What a successful command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Listed(Vec<ApplicationSummary>),
    Added { name: String },
    Deleted { name: String },
    LoggedIn { username: String, roles: Vec<String> },
    LoggedOut { had_session: bool },
}

impl Outcome {
    /// One-line confirmation shown to the operator.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Listed(applications) => match applications.len() {
                0 => "No applications found".to_string(),
                1 => "Found 1 application".to_string(),
                n => format!("Found {n} applications"),
            },
            Self::Added { name } => format!("Application '{name}' added successfully"),
            Self::Deleted { name } => format!("Application '{name}' deleted successfully"),
            Self::LoggedIn { username, roles } if roles.is_empty() => {
                format!("Logged in as '{username}' without any role")
            }
            Self::LoggedIn { username, roles } => {
                format!("Logged in as '{username}', roles: {}", roles.join(", "))
            }
            Self::LoggedOut { had_session: true } => "Logged out".to_string(),
            Self::LoggedOut { had_session: false } => "No active session".to_string(),
        }
    }
}

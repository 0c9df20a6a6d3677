use casdoor_admin_core::model::ApplicationId;
use snafu::Snafu;

use crate::casdoor_client;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to get applications, error: {source}"))]
    GetApplications { source: casdoor_client::Error },

    #[snafu(display("Failed to add application `{id}`, error: {source}"))]
    AddApplication { id: ApplicationId, source: casdoor_client::Error },

    #[snafu(display("Failed to delete application `{id}`, error: {source}"))]
    DeleteApplication { id: ApplicationId, source: casdoor_client::Error },
}

mod applications;
mod session;

use snafu::ResultExt;
use tokio::runtime::{Builder, Runtime};

pub use self::{
    applications::run_applications,
    session::{login, logout},
};
use crate::error::{self, Result};

/// Every invocation runs a single command on the current thread.
fn runtime() -> Result<Runtime> {
    tracing::debug!("Initializing Tokio runtime");
    Builder::new_current_thread().enable_all().build().context(error::InitializeTokioRuntimeSnafu)
}

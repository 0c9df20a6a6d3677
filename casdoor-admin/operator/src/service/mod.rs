mod application_management;
pub mod error;

pub use self::{
    application_management::ApplicationManager,
    error::{Error, Result},
};

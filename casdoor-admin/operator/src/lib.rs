pub mod casdoor_client;
pub mod command;
pub mod service;
pub mod session;

pub use self::{
    casdoor_client::{ApplicationApi, CasdoorClient},
    command::{ApplicationCommands, ErrorKind, Outcome},
    session::{LocalSessionGate, SessionGate, SessionStore, TokenVerifier},
};

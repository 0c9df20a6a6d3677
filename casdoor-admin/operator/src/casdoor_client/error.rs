use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid Casdoor endpoint `{endpoint}`: {message}"))]
    InvalidEndpoint { endpoint: String, message: String },

    #[snafu(display("Failed to initialize HTTP client, error: {source}"))]
    BuildHttpClient { source: reqwest::Error },

    #[snafu(display("Failed to send `{action}` request to Casdoor, error: {source}"))]
    SendRequest { action: &'static str, source: reqwest::Error },

    #[snafu(display("Casdoor answered `{action}` with HTTP {status}: {body}"))]
    UnexpectedStatus { action: &'static str, status: u16, body: String },

    #[snafu(display("Failed to decode `{action}` response from Casdoor, error: {source}"))]
    DecodeResponse { action: &'static str, source: reqwest::Error },

    #[snafu(display("Failed to decode `{action}` payload from Casdoor, error: {source}"))]
    DecodeData { action: &'static str, source: serde_json::Error },

    #[snafu(display("Casdoor rejected `{action}`: {message}"))]
    Rejected { action: &'static str, message: String },

    #[snafu(display("Casdoor did not change anything for `{action}` on `{id}`"))]
    Unaffected { action: &'static str, id: String },
}

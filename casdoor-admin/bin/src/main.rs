mod cli;
mod command;
mod config;
mod error;
mod output;
mod shadow {
    #![allow(clippy::needless_raw_string_hashes)]
    use shadow_rs::shadow;
    shadow!(build);

    pub use self::build::*;
}

use clap::Parser;

use self::{cli::Cli, error::CommandError};

fn main() {
    if let Err(err) = Cli::parse().run() {
        tracing::error!(error = %err);
        output::failure(&err.to_string());
        std::process::exit(err.exit_code());
    }
}

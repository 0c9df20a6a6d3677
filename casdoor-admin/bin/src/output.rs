use std::io::{self, Write};

use casdoor_admin_core::model::ApplicationSummary;
use casdoor_admin_operator::Outcome;
use clap::ValueEnum;
use colored::Colorize;
use snafu::ResultExt;
use tabled::{settings::Style, Table};

use crate::error::{self, Result};

/// How `applications list` prints its rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

pub fn success(message: &str) {
    println!("{} {message}", "✓".green().bold());
}

pub fn failure(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Print a command outcome; listings follow `format`.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<()> {
    match outcome {
        Outcome::Listed(applications) => render_applications(applications, format),
        outcome => {
            success(&outcome.message());
            Ok(())
        }
    }
}

fn render_applications(applications: &[ApplicationSummary], format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Table if applications.is_empty() => {
            success(&Outcome::Listed(Vec::new()).message());
            return Ok(());
        }
        OutputFormat::Table => {
            let mut table = Table::new(applications);
            let _ = table.with(Style::rounded());
            format!("{table}\n")
        }
        OutputFormat::Json => {
            let mut text =
                serde_json::to_string_pretty(applications).context(error::SerializeJsonSnafu)?;
            text.push('\n');
            text
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(applications).context(error::SerializeYamlSnafu)?
        }
    };

    io::stdout().write_all(text.as_bytes()).context(error::WriteStdoutSnafu)
}

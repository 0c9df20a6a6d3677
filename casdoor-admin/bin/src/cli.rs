use std::{io, io::Write, path::PathBuf};

use casdoor_admin_operator::command::{AddApplicationParams, DeleteApplicationParams, LoginParams};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use snafu::ResultExt;

use crate::{
    command,
    config::Config,
    error::{self, Result},
    output::OutputFormat,
    shadow,
};

#[derive(Debug, Parser)]
#[command(author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about,
    long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(
        long = "config",
        env = "CASDOOR_ADMIN_CONFIG_FILE_PATH",
        global = true,
        help = "Specify a configuration file"
    )]
    config_file_path: Option<PathBuf>,

    #[clap(
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Table,
        global = true,
        help = "Output format of listings"
    )]
    output: OutputFormat,

    #[clap(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more details to stderr, repeat for more"
    )]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(about = "Print version information")]
    Version,

    #[clap(about = "Output shell completion code for the specified shell (bash, zsh, fish)")]
    Completion { shell: Shell },

    #[clap(about = "Output default configuration")]
    DefaultConfig,

    #[clap(about = "Log in to Casdoor and store the session")]
    Login(LoginParams),

    #[clap(about = "Remove the stored session")]
    Logout,

    #[clap(about = "Manage applications")]
    #[command(subcommand, visible_alias = "apps")]
    Applications(ApplicationsCommand),
}

#[derive(Clone, Debug, Subcommand)]
pub enum ApplicationsCommand {
    #[clap(about = "List applications")]
    #[command(visible_alias = "ls")]
    List,

    #[clap(about = "Register a new application")]
    Add(AddApplicationParams),

    #[clap(about = "Delete an application")]
    #[command(visible_alias = "rm")]
    Delete(DeleteApplicationParams),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match &self.command {
            Command::Version => {
                io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .context(error::WriteStdoutSnafu)?;
            }
            Command::Completion { shell } => {
                let mut command = Self::command();
                let bin_name = command.get_name().to_string();
                clap_complete::generate(*shell, &mut command, bin_name, &mut io::stdout());
            }
            Command::DefaultConfig => {
                let config_text =
                    serde_yaml::to_string(&Config::default()).context(error::SerializeYamlSnafu)?;
                io::stdout().write_all(config_text.as_bytes()).context(error::WriteStdoutSnafu)?;
            }
            Command::Login(params) => {
                let config = self.load_config()?;
                command::login(config, params.clone())?;
            }
            Command::Logout => {
                let config = self.load_config()?;
                command::logout(&config)?;
            }
            Command::Applications(subcommand) => {
                let config = self.load_config()?;
                command::run_applications(config, subcommand.clone(), self.output)?;
            }
        }

        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        let config_file_path =
            self.config_file_path.clone().unwrap_or_else(Config::default_path);
        let config = Config::load(config_file_path)?;

        let log = match self.verbose {
            0 => config.log,
            1 => config.log.with_log_filters("info"),
            2 => config.log.with_log_filters("debug"),
            _ => config.log.with_log_filters("trace"),
        };
        log.registry();

        Ok(Config { log, ..config })
    }
}

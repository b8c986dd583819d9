//! Main CLI application

use crate::cli::commands::{execute, Action, CommandContext, GenerateOptions};
use crate::cli::{InputProvider, StdinInput};
use crate::config::{ConfigStore, CONFIG_FILE_NAME};
use crate::error::{CommandError, Result};
use crate::ui::Console;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

/// A command line resolved into the config file to use and the action to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config_path: PathBuf,
    pub action: Action,
}

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Resolve command line arguments (program name first) into an invocation
    pub fn parse<I, T>(&mut self, args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.command.try_get_matches_from_mut(args) {
            Ok(matches) => matches,
            Err(err) => return Err(map_clap_error(err).into()),
        };

        if matches.get_flag("version") {
            return Ok(Invocation {
                config_path: ConfigStore::in_working_dir().path().to_path_buf(),
                action: Action::Version,
            });
        }

        let (name, sub_matches) = match matches.subcommand() {
            Some(sub) => sub,
            None => {
                // No command given, show usage
                let help = self.command.render_help().to_string();
                return Err(CommandError::Help(help.trim_end().to_string()).into());
            }
        };

        let config_path = sub_matches
            .get_one::<PathBuf>("config")
            .or_else(|| matches.get_one::<PathBuf>("config"))
            .cloned()
            .unwrap_or_else(|| ConfigStore::in_working_dir().path().to_path_buf());

        let action = parse_action(name, sub_matches)?;

        Ok(Invocation {
            config_path,
            action,
        })
    }

    /// Run the application with the given arguments, console, and input
    pub fn run_from<I, T, W, R>(
        mut self,
        args: I,
        console: &mut Console<W>,
        input: &mut R,
    ) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        W: Write,
        R: InputProvider,
    {
        let invocation = self.parse(args)?;
        let store = ConfigStore::new(invocation.config_path);
        let mut ctx = CommandContext::new(store, console, input);
        execute(&invocation.action, &mut ctx)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command tree
fn build_command() -> Command {
    Command::new("site-mapper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate XML sitemaps for a directory of HTML files")
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help(format!("Path to the config file [default: {}]", CONFIG_FILE_NAME))
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate sitemap")
                .args_override_self(true)
                .arg(
                    Arg::new("directory")
                        .short('d')
                        .long("directory")
                        .value_name("DIRECTORY")
                        .help("Specify the directory to scan for HTML files")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("url")
                        .short('u')
                        .long("url")
                        .value_name("BASE_URL")
                        .help("Specify the base URL for the sitemap")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help("Verbose mode")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("view-config").about("View current configuration"))
        .subcommand(
            Command::new("set-priority")
                .about("Set priority for a specific path")
                .arg(path_arg())
                .arg(priority_arg()),
        )
        .subcommand(Command::new("delete-priority").about("Delete priority for a specific path"))
        .subcommand(
            Command::new("set-changefreq").about("Set change frequency").arg(
                Arg::new("changefreq")
                    .value_name("CHANGEFREQ")
                    .required(true)
                    .allow_hyphen_values(true),
            ),
        )
        .subcommand(
            Command::new("set-specific-priority")
                .about("Set priority for a specific page")
                .arg(path_arg())
                .arg(priority_arg()),
        )
        .subcommand(
            Command::new("delete-specific-priority").about("Delete priority for a specific page"),
        )
        .subcommand(Command::new("list-settings").about("List current settings"))
}

fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .required(true)
        .allow_hyphen_values(true)
}

fn priority_arg() -> Arg {
    Arg::new("priority")
        .value_name("PRIORITY")
        .required(true)
        .allow_hyphen_values(true)
}

/// Turn a subcommand and its matches into an action
fn parse_action(name: &str, matches: &ArgMatches) -> Result<Action> {
    let string = |id: &str| matches.get_one::<String>(id).cloned();
    // Positional arguments below are marked required, so clap has checked them
    let required = |id: &str| {
        string(id).ok_or_else(|| CommandError::Usage(format!("Missing argument <{}>", id)))
    };

    let action = match name {
        "generate" => Action::Generate(GenerateOptions {
            directory: string("directory"),
            base_url: string("url"),
            verbose: matches.get_flag("verbose"),
        }),
        "view-config" => Action::ViewConfig,
        "set-priority" => Action::SetPriority {
            path: required("path")?,
            priority: required("priority")?,
        },
        "delete-priority" => Action::DeletePriority,
        "set-changefreq" => Action::SetChangefreq(required("changefreq")?),
        "set-specific-priority" => Action::SetSpecificPriority {
            path: required("path")?,
            priority: required("priority")?,
        },
        "delete-specific-priority" => Action::DeleteSpecificPriority,
        "list-settings" => Action::ListSettings,
        other => return Err(CommandError::InvalidCommand(other.to_string()).into()),
    };

    Ok(action)
}

/// Map a clap parse failure onto the CLI's own errors
fn map_clap_error(err: clap::Error) -> CommandError {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            CommandError::Help(err.render().to_string().trim_end().to_string())
        }
        ErrorKind::InvalidSubcommand => {
            let name = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => String::new(),
            };
            CommandError::InvalidCommand(name)
        }
        _ => CommandError::Usage(err.render().to_string().trim_end().to_string()),
    }
}

/// Run the CLI application against the process's arguments, stdout, and stdin
pub fn run() -> Result<()> {
    let mut console = Console::stdout();
    let mut input = StdinInput;
    App::new().run_from(std::env::args_os(), &mut console, &mut input)
}

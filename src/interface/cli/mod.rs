//! Command-line adapter
//!
//! Parses arguments, runs exactly one application use case per command and
//! turns the outcome into output text plus an exit status. The process
//! itself is only terminated by `main`.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

use crate::application::errors::ServiceError;
use crate::application::services::{NewPerson, NotificationService, PersonService};
use crate::domain::entities::{Person, Role};

#[derive(Parser, Debug)]
#[command(name = "person-directory")]
#[command(about = "Manage people in a layered person directory", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Database file (overrides config)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Person(PersonCommand),
    /// Generate default config
    InitConfig,
    /// Show version
    Version,
}

/// Commands backed by an application use case
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PersonCommand {
    /// Show a person
    GetPerson {
        id: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename a person
    UpdatePersonName { id: String, new_name: String },
    /// Add a person
    CreatePerson {
        name: String,
        email: String,
        /// admin or user
        role: String,
        /// Use this ID instead of generating one
        #[arg(long)]
        id: Option<String>,
    },
    /// Change a person's role
    ChangeRole {
        id: String,
        /// admin or user
        role: String,
    },
    /// Send a message to a person's email
    NotifyPerson { id: String, message: String },
}

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Unexpected,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Unexpected => 2,
        }
    }
}

/// CLI errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Failed to render output: {0}")]
    Output(String),
}

impl CliError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            CliError::Output(_) => ExitStatus::Unexpected,
            _ => ExitStatus::Failure,
        }
    }

    /// Message shown to the user; store details only go to the log
    pub fn user_message(&self) -> String {
        match self {
            CliError::Input(msg) => format!("Error: {}", msg),
            CliError::Service(ServiceError::PersonNotFound(_)) => self.to_string(),
            CliError::Service(ServiceError::Persistence { action, source }) => {
                tracing::error!("Failed to {}: {}", action, source);
                format!("Error: failed to {}. See logs for details.", action)
            }
            CliError::Service(err) => format!("Error: {}", err),
            CliError::Output(msg) => {
                tracing::error!("Failed to render output: {}", msg);
                "Error: an unexpected error occurred. See logs for details.".to_string()
            }
        }
    }
}

/// Argument parsing that did not produce a runnable [`Cli`]
#[derive(Debug)]
pub struct ParseFailure {
    pub message: String,
    pub status: ExitStatus,
}

impl ParseFailure {
    pub fn print(&self) {
        if self.status == ExitStatus::Success {
            print!("{}", self.message);
        } else {
            eprint!("{}", self.message);
        }
    }
}

/// Parse arguments; help requests succeed, anything else unusable fails with usage
pub fn parse_from<I, T>(args: I) -> Result<Cli, ParseFailure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| {
        let status = match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                ExitStatus::Success
            }
            _ => ExitStatus::Failure,
        };
        ParseFailure {
            message: e.render().to_string(),
            status,
        }
    })
}

/// Use cases the CLI can reach
pub struct Services {
    pub people: PersonService,
    pub notifications: NotificationService,
}

/// Run one command and return the text to print on success
pub async fn execute(command: PersonCommand, services: &Services) -> Result<String, CliError> {
    match command {
        PersonCommand::GetPerson { id, json } => {
            let person = services.people.get_person_by_id(&id).await?;
            if json {
                format_json(&person)
            } else {
                Ok(format_person(&person))
            }
        }
        PersonCommand::UpdatePersonName { id, new_name } => {
            let person = services.people.update_name(&id, &new_name).await?;
            Ok(format!("Updated name of person {} to '{}'.", person.id(), person.name()))
        }
        PersonCommand::CreatePerson { name, email, role, id } => {
            let role = parse_role(&role)?;
            let mut input = NewPerson::new(name, email, role);
            if let Some(id) = id {
                input = input.with_id(id);
            }
            let person = services.people.create_person(input).await?;
            Ok(format!("Created person with ID: {}", person.id()))
        }
        PersonCommand::ChangeRole { id, role } => {
            let role = parse_role(&role)?;
            let person = services.people.change_role(&id, role).await?;
            Ok(format!("Role of person {} is now {}.", person.id(), person.role()))
        }
        PersonCommand::NotifyPerson { id, message } => {
            services.notifications.notify_person(&id, &message).await?;
            Ok(format!(
                "Sent message to person {} via {}.",
                id,
                services.notifications.sender().name()
            ))
        }
    }
}

fn parse_role(raw: &str) -> Result<Role, CliError> {
    raw.parse::<Role>()
        .map_err(|e| CliError::Input(e.to_string()))
}

fn format_person(person: &Person) -> String {
    format!(
        "ID: {}\nName: {}\nEmail: {}\nRole: {}",
        person.id(),
        person.name(),
        person.email(),
        person.role()
    )
}

fn format_json(person: &Person) -> Result<String, CliError> {
    let value = serde_json::json!({
        "id": person.id(),
        "name": person.name(),
        "email": person.email(),
        "role": person.role().as_str(),
    });
    serde_json::to_string_pretty(&value).map_err(|e| CliError::Output(e.to_string()))
}

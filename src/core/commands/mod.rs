use std::fmt;

mod cd;
mod help;
mod ls;
mod pwd;
mod reboot;
mod stubs;

pub use cd::CdCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use pwd::PwdCommand;
pub use reboot::RebootCommand;
pub use stubs::PlaceholderCommand;

use crate::core::state::Session;
use crate::highlight::OutputStyler;
use crate::sys::{SysError, System};

#[derive(Debug)]
pub enum CommandError {
    PathTooLong,
    ChangeDirectory(String),
    OpenDirectory(String),
    Unimplemented(&'static str),
    Sys(SysError),
    IoError(std::io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::PathTooLong => write!(f, "Path too long"),
            CommandError::ChangeDirectory(path) => {
                write!(f, "Cannot switch to directory: {}", path)
            }
            CommandError::OpenDirectory(path) => write!(f, "Cannot open directory: {}", path),
            CommandError::Unimplemented(name) => write!(f, "{}: not implemented", name),
            CommandError::Sys(err) => write!(f, "{}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<SysError> for CommandError {
    fn from(err: SysError) -> Self {
        CommandError::Sys(err)
    }
}

/// A built-in command. The full argument vector is moved in (argv[0] is the
/// command name) and dropped when the handler returns, whichever exit path
/// it takes.
pub trait Command {
    fn execute(
        &self,
        session: &mut Session,
        sys: &dyn System,
        argv: Vec<String>,
    ) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum Builtin {
    Cd(CdCommand),
    Ls(LsCommand),
    Pwd(PwdCommand),
    Reboot(RebootCommand),
    Help(HelpCommand),
    Placeholder(PlaceholderCommand),
}

impl Command for Builtin {
    fn execute(
        &self,
        session: &mut Session,
        sys: &dyn System,
        argv: Vec<String>,
    ) -> Result<(), CommandError> {
        match self {
            Builtin::Cd(cmd) => cmd.execute(session, sys, argv),
            Builtin::Ls(cmd) => cmd.execute(session, sys, argv),
            Builtin::Pwd(cmd) => cmd.execute(session, sys, argv),
            Builtin::Reboot(cmd) => cmd.execute(session, sys, argv),
            Builtin::Help(cmd) => cmd.execute(session, sys, argv),
            Builtin::Placeholder(cmd) => cmd.execute(session, sys, argv),
        }
    }
}

pub struct CommandEntry {
    name: &'static str,
    handler: Builtin,
}

impl CommandEntry {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Name-to-handler table for the built-ins. Built once at startup and never
/// modified; lookup is a linear scan over the entries in registration order.
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    pub fn new(styler: OutputStyler) -> Self {
        let entries = vec![
            CommandEntry {
                name: "cd",
                handler: Builtin::Cd(CdCommand::new()),
            },
            CommandEntry {
                name: "cat",
                handler: Builtin::Placeholder(PlaceholderCommand::new("cat")),
            },
            CommandEntry {
                name: "exec",
                handler: Builtin::Placeholder(PlaceholderCommand::new("exec")),
            },
            CommandEntry {
                name: "ls",
                handler: Builtin::Ls(LsCommand::new(styler)),
            },
            CommandEntry {
                name: "mkdir",
                handler: Builtin::Placeholder(PlaceholderCommand::new("mkdir")),
            },
            CommandEntry {
                name: "pwd",
                handler: Builtin::Pwd(PwdCommand::new()),
            },
            CommandEntry {
                name: "rm",
                handler: Builtin::Placeholder(PlaceholderCommand::new("rm")),
            },
            CommandEntry {
                name: "rmdir",
                handler: Builtin::Placeholder(PlaceholderCommand::new("rmdir")),
            },
            CommandEntry {
                name: "reboot",
                handler: Builtin::Reboot(RebootCommand::new()),
            },
            CommandEntry {
                name: "touch",
                handler: Builtin::Placeholder(PlaceholderCommand::new("touch")),
            },
            CommandEntry {
                name: "help",
                handler: Builtin::Help(HelpCommand::new()),
            },
        ];

        Registry { entries }
    }

    /// Exact, case-sensitive lookup; first match wins.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Run the handler at `index`. An out-of-range index is a silent no-op;
    /// callers are expected to have checked `find` first.
    pub fn dispatch(
        &self,
        index: usize,
        session: &mut Session,
        sys: &dyn System,
        argv: Vec<String>,
    ) -> Result<(), CommandError> {
        match self.entries.get(index) {
            Some(entry) => entry.handler.execute(session, sys, argv),
            None => Ok(()),
        }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }
}

use super::{Command, CommandError};
use crate::core::state::{Session, SHELL_CWD_MAX_SIZE};
use crate::sys::System;

/// Change the working directory.
///
/// Resolves `.`, `..`, absolute and relative destinations against the
/// session path. The OS is asked to change directory first; the session
/// string is only replaced once that call succeeds, so a failed `cd`
/// leaves the session exactly where it was.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        session: &mut Session,
        sys: &dyn System,
        argv: Vec<String>,
    ) -> Result<(), CommandError> {
        let dest = match argv.get(1) {
            Some(dest) => dest.as_str(),
            None => {
                print_usage();
                return Ok(());
            }
        };

        if dest == "." {
            return Ok(());
        }

        if dest == ".." {
            if session.current_path() != "/" {
                // Drop the final segment. The parent was entered before, so
                // no OS round trip is needed; never truncate past the root.
                let cut = session.current_path().rfind('/').unwrap_or(0).max(1);
                session.current_path.truncate(cut);
            }
            return Ok(());
        }

        if dest.len() >= SHELL_CWD_MAX_SIZE - 1 {
            return Err(CommandError::PathTooLong);
        }

        if dest.starts_with('/') {
            sys.change_directory(dest)
                .map_err(|_| CommandError::ChangeDirectory(dest.to_string()))?;
            session.current_path = dest.to_string();
            return Ok(());
        }

        // Relative destination: a leading "./" is redundant once the current
        // path is prepended, so strip it when anything follows it.
        let rest = if dest.len() > 2 && dest.starts_with("./") {
            &dest[2..]
        } else {
            dest
        };

        let candidate = if session.current_path() == "/" {
            format!("/{}", rest)
        } else {
            format!("{}/{}", session.current_path(), rest)
        };

        if candidate.len() >= SHELL_CWD_MAX_SIZE - 1 {
            return Err(CommandError::PathTooLong);
        }

        sys.change_directory(&candidate)
            .map_err(|_| CommandError::ChangeDirectory(candidate.clone()))?;
        session.current_path = candidate;
        Ok(())
    }
}

fn print_usage() {
    println!("Usage: cd <directory>");
    println!("  cd ..   move to the parent directory");
}

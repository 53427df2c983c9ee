use super::{Command, CommandError};
use crate::core::state::Session;
use crate::sys::System;

const BUILTINS: &[(&str, &str)] = &[
    ("cd", "change the working directory"),
    ("cat", "print file contents (not implemented)"),
    ("exec", "run a program (not implemented)"),
    ("ls", "list the working directory"),
    ("mkdir", "create a directory (not implemented)"),
    ("pwd", "print the working directory"),
    ("rm", "remove a file (not implemented)"),
    ("rmdir", "remove a directory (not implemented)"),
    ("reboot", "reboot the machine"),
    ("touch", "create an empty file (not implemented)"),
    ("help", "show this list"),
];

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(
        &self,
        _session: &mut Session,
        _sys: &dyn System,
        _argv: Vec<String>,
    ) -> Result<(), CommandError> {
        println!("Built-in commands:");
        for (name, summary) in BUILTINS {
            println!("  {:<8} {}", name, summary);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::fake::FakeSystem;

    #[test]
    fn test_help_succeeds_without_touching_state() {
        let mut session = Session::with_current("/etc");
        let sys = FakeSystem::with_dirs(&[]);

        let result = HelpCommand::new().execute(&mut session, &sys, vec!["help".to_string()]);

        assert!(result.is_ok());
        assert_eq!(session.current_path(), "/etc");
    }
}

use super::{Command, CommandError};
use crate::core::state::Session;
use crate::sys::System;

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(
        &self,
        session: &mut Session,
        _sys: &dyn System,
        _argv: Vec<String>,
    ) -> Result<(), CommandError> {
        if !session.current_path().is_empty() {
            println!("{}", session.current_path());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::fake::FakeSystem;

    #[test]
    fn test_pwd_never_fails() {
        let mut session = Session::with_current("/home/user");
        let sys = FakeSystem::with_dirs(&[]);

        let result = PwdCommand::new().execute(&mut session, &sys, vec!["pwd".to_string()]);

        assert!(result.is_ok());
        assert_eq!(session.current_path(), "/home/user");
    }
}

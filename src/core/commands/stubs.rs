use super::{Command, CommandError};
use crate::core::state::Session;
use crate::sys::System;

/// Registered but not-yet-specified built-in. Reports itself as
/// unimplemented instead of guessing at behavior; replace the registry
/// entry with a real handler when one is written.
#[derive(Clone)]
pub struct PlaceholderCommand {
    name: &'static str,
}

impl PlaceholderCommand {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Command for PlaceholderCommand {
    fn execute(
        &self,
        _session: &mut Session,
        _sys: &dyn System,
        _argv: Vec<String>,
    ) -> Result<(), CommandError> {
        Err(CommandError::Unimplemented(self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::fake::FakeSystem;

    #[test]
    fn test_placeholder_names_itself() {
        let mut session = Session::new();
        let sys = FakeSystem::with_dirs(&[]);

        let result =
            PlaceholderCommand::new("touch").execute(&mut session, &sys, vec!["touch".to_string()]);

        assert!(matches!(result, Err(CommandError::Unimplemented("touch"))));
    }
}

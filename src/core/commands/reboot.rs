use super::{Command, CommandError};
use crate::core::state::Session;
use crate::sys::System;

/// Ask the OS to reboot. Whatever the primitive reports comes straight back.
#[derive(Clone)]
pub struct RebootCommand;

impl Default for RebootCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RebootCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RebootCommand {
    fn execute(
        &self,
        _session: &mut Session,
        sys: &dyn System,
        _argv: Vec<String>,
    ) -> Result<(), CommandError> {
        sys.reboot().map_err(CommandError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::fake::FakeSystem;

    #[test]
    fn test_reboot_invokes_primitive_once() {
        let mut session = Session::new();
        let sys = FakeSystem::with_dirs(&[]);

        RebootCommand::new()
            .execute(&mut session, &sys, vec!["reboot".to_string()])
            .unwrap();

        assert_eq!(*sys.reboot_count.borrow(), 1);
    }
}

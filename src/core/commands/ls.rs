use super::{Command, CommandError};
use crate::core::state::Session;
use crate::highlight::OutputStyler;
use crate::sys::System;

/// List the working directory, one line, entries colored by kind.
#[derive(Clone)]
pub struct LsCommand {
    styler: OutputStyler,
}

impl LsCommand {
    pub fn new(styler: OutputStyler) -> Self {
        Self { styler }
    }
}

impl Command for LsCommand {
    fn execute(
        &self,
        session: &mut Session,
        sys: &dyn System,
        _argv: Vec<String>,
    ) -> Result<(), CommandError> {
        let entries = sys
            .list_directory(session.current_path())
            .map_err(|_| CommandError::OpenDirectory(session.current_path().to_string()))?;

        let mut line = String::new();
        for entry in &entries {
            line.push_str(&self.styler.paint_entry(&entry.name, entry.kind));
            line.push_str("   ");
        }
        println!("{}", line);
        Ok(())
    }
}

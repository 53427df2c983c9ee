use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<(), ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        // Skip empty commands early
        if line.trim().is_empty() {
            return Ok(());
        }

        let argv: Vec<String> = line.split_whitespace().map(String::from).collect();
        let Some(name) = argv.first() else {
            return Ok(());
        };

        match self.registry.find(name) {
            Some(index) => self
                .registry
                .dispatch(index, &mut self.session, &self.sys, argv)
                .map_err(ShellError::Command),
            None => {
                // Unknown-command messaging lives here, not in the registry
                if !self.flags.is_set("quiet") {
                    eprintln!(
                        "{}",
                        self.styler
                            .paint_error(&format!("rill: command not found: {}", name))
                    );
                }
                Ok(())
            }
        }
    }
}

use std::env;
use std::path::PathBuf;

use rustyline::{config::Configurer, DefaultEditor};

mod executor;

use crate::{
    core::{commands::Registry, state::Session},
    error::ShellError,
    flags::Flags,
    highlight::OutputStyler,
    sys::RealSystem,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) session: Session,
    pub(crate) registry: Registry,
    pub(crate) styler: OutputStyler,
    pub(crate) flags: Flags,
    pub(crate) sys: RealSystem,
    history_file: PathBuf,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let styler = OutputStyler::new();

        let mut editor = DefaultEditor::new()?;
        editor.set_auto_add_history(true);

        let current = env::current_dir()?.to_string_lossy().to_string();
        let session = Session::with_current(current);

        let history_file = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(".rill_history");
        if history_file.exists() {
            if let Err(e) = editor.load_history(&history_file) {
                if !flags.is_set("quiet") {
                    eprintln!("Warning: Couldn't load history: {}", e);
                }
            }
        }

        // Ctrl-C must not kill the shell itself
        ctrlc::set_handler(move || {
            println!("\nUse Ctrl-D to leave the shell");
        })?;

        Ok(Shell {
            editor,
            session,
            registry: Registry::new(styler),
            styler,
            flags,
            sys: RealSystem::new(),
            history_file,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = format!("{} > ", self.session.current_path());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.execute_line(&line) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("{}", self.styler.paint_error(&e.to_string()));
                        }
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-D");
                    }
                    break;
                }
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_file) {
            if !self.flags.is_set("quiet") {
                eprintln!("Warning: Couldn't save history: {}", e);
            }
        }
        Ok(())
    }
}

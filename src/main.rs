use rill::flags::Flags;
use rill::shell::Shell;
use std::env;

fn main() -> Result<(), rill::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("rill {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut shell = Shell::new(flags)?;
    shell.run()
}

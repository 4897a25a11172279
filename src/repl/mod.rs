pub mod commands;

pub use commands::MetaCommand;
use log::debug;
use std::{
    error::Error,
    io::{BufRead, Write},
    ops::ControlFlow,
    path::Path,
};

use crate::storage::{Output, Statement, Store};

/// Starts a database REPL session over the store at `path`
///
/// Returns once `.exit` is entered or stdin is exhausted; the store is closed either way.
pub fn start_repl(name: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut store = Store::open(path)?;
    let mut stdin = std::io::stdin().lock();
    let mut buf = Vec::new();

    loop {
        print!("{name} > ");
        std::io::stdout().flush()?;

        buf.clear();
        if stdin.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                println!("error: input is not valid UTF-8; {e}");
                continue;
            }
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.starts_with('.') {
            let flow = match MetaCommand::try_from(input) {
                Ok(command) => command.execute(&store),
                Err(e) => Err(e.into()),
            };
            match flow {
                Ok(ControlFlow::Break(())) => break,
                Ok(ControlFlow::Continue(())) => {}
                Err(e) => println!("error: {e}"),
            }
            continue;
        }

        match Statement::try_from(input) {
            Ok(statement) => {
                debug!("executing {statement:?}");
                match statement.execute(&mut store) {
                    Ok(Output::Done) => {}
                    Ok(Output::Records(records)) if records.is_empty() => {}
                    Ok(output) => println!("{output}"),
                    Err(e) => println!("error: {e}"),
                }
            }
            Err(e) => println!("error: {e}"),
        }
    }

    println!();
    store.close();
    Ok(())
}

use crate::environment::Environment;
use crate::interpreter;
use linefeed::{DefaultTerminal, Interface, ReadResult, Terminal};
use std::path::PathBuf;

fn setup() -> std::io::Result<Interface<DefaultTerminal>> {
    let interface = linefeed::Interface::new("lispet")?;
    interface.set_prompt("lispet> ")?;
    if let Some(path) = history_path() {
        interface.load_history(path).ok();
    };
    Ok(interface)
}

fn history_path() -> Option<PathBuf> {
    let mut path = dirs::data_dir()?;
    path.push(".lispet_history");
    Some(path)
}

fn save_history<T: Terminal>(interface: &Interface<T>) -> std::io::Result<()> {
    match history_path() {
        Some(path) => interface.save_history(path),
        None => Ok(()),
    }
}

/// Read one line per iteration, evaluate it against `env` and print the
/// result or the error; loop until EOF.
pub fn launch(env: &Environment) -> std::io::Result<()> {
    let interface = setup()?;
    loop {
        match interface.read_line() {
            Ok(ReadResult::Eof) => break,
            Ok(ReadResult::Signal(sig)) => {
                writeln!(interface, "Received signal {:?}", sig).ok();
            }
            Ok(ReadResult::Input(line)) => {
                interface.add_history_unique(line.clone());
                writeln!(interface, "{}", interpreter::rep(&line, env)).ok();
            }
            Err(e) => {
                writeln!(interface, "Error: {}", e).ok();
                break;
            }
        }
    }
    save_history(&interface)
}

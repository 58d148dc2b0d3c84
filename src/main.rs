use weir::command::Command;
use weir::config;
use weir::engine::Engine;
use weir::err::FatalErr;

use std::convert::TryFrom;
use std::io::{self, BufRead};

/// Replay harness: applies newline-delimited JSON commands from stdin to one
/// engine and prints the final state snapshot.  Useful for reproducing a
/// session from a transport-layer trace.
fn main() {
    run().unwrap_or_else(FatalErr::exit)
}

fn run() -> Result<(), FatalErr> {
    config::merge_dotenv()?;
    pretty_env_logger::try_init()?;
    let cfg = config::from_env(dotenv::vars().collect())?;

    let mut engine = Engine::new(cfg);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::try_from(line.as_str()) {
            Ok(command) => engine.apply(command),
            Err(e) => log::error!("{}", e), // drop the line, log, and proceed
        }
    }

    println!("{}", serde_json::to_string_pretty(&engine)?);
    Ok(())
}

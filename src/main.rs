//! skelhub — headless shell driver
//!
//! Stands in for the browser navigation subsystem: reads navigation paths
//! and session snapshots from stdin, drives the shell controller, and
//! prints which view mounted with which parameters.
//!
//! Commands:
//! - `/some/path` — navigate (unmatched paths fall back to `/home`)
//! - `session <json>` — hydrate a login snapshot through the store
//! - `restore <json>` — replace the whole record, bypassing mutations
//!   (rejected while strict mode is on)
//! - `state` — dump the current session record
//! - `quit` — exit

use std::io::{self, BufRead, Write as _};
use std::process;

use skelhub::app::controller::{MountedView, ShellController};
use skelhub::app::store::{SessionSnapshot, SessionState};
use skelhub::config::ShellConfig;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("skelhub: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = ShellController::bootstrap(ShellConfig::default())?;
    println!(
        "skelhub shell ready (strict mode: {}); routes:",
        shell.store().is_strict()
    );
    for route in shell.routes().routes() {
        println!("  {}  ->  {}", route.pattern().as_str(), route.view());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "state" => match serde_json::to_string_pretty(shell.state()) {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("cannot render state: {}", err),
            },
            _ if line.starts_with("session ") => {
                match serde_json::from_str::<SessionSnapshot>(&line["session ".len()..]) {
                    Ok(snapshot) => {
                        shell.hydrate_session(snapshot);
                        println!("session hydrated");
                    }
                    Err(err) => eprintln!("invalid session snapshot: {}", err),
                }
            }
            _ if line.starts_with("restore ") => {
                match serde_json::from_str::<SessionState>(&line["restore ".len()..]) {
                    Ok(state) => match shell.restore_state(state) {
                        Ok(()) => println!("state restored"),
                        Err(err) => eprintln!("restore rejected: {}", err),
                    },
                    Err(err) => eprintln!("invalid state record: {}", err),
                }
            }
            _ if line.starts_with('/') => match shell.navigate(line) {
                Ok(mounted) => print_mounted(mounted),
                Err(err) => eprintln!("navigation failed: {}", err),
            },
            _ => eprintln!("unknown command: {:?}", line),
        }
    }

    Ok(())
}

fn print_mounted(mounted: &MountedView) {
    println!("mounted {}", mounted.view);
    for (name, value) in mounted.params.iter() {
        match value {
            Some(value) => println!("  {} = {:?}", name, value),
            None => println!("  {} (absent)", name),
        }
    }
}

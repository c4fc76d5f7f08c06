//! Command-line entry point.
//!
//! Takes one positional argument — the path to a process record file —
//! loads and validates the processes, runs all four disciplines over
//! the same input, and prints one report per run. Exits with code 1
//! and a diagnostic on a missing argument, an unreadable file, or a
//! malformed record.

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use cpu_sched::{input, report, validation, Fcfs, Priority, RoundRobin, Scheduler, Sjf};

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("cpu-sched: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let path = env::args()
        .nth(1)
        .ok_or("missing argument: usage: cpu-sched <process-file>")?;

    let file = File::open(&path).map_err(|e| format!("cannot open {path}: {e}"))?;
    let processes =
        input::load_processes(BufReader::new(file)).map_err(|e| format!("{path}: {e}"))?;

    if let Err(errors) = validation::validate_processes(&processes) {
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        return Err(format!("invalid input: {}", messages.join("; ")));
    }
    log::info!("loaded {} processes from {path}", processes.len());

    let schedulers: [Box<dyn Scheduler>; 4] = [
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(Priority),
        Box::new(RoundRobin::new()),
    ];

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for scheduler in &schedulers {
        let outcome = scheduler.run(&processes).map_err(|e| e.to_string())?;
        report::write_report(&mut out, scheduler.name(), &outcome)
            .map_err(|e| format!("writing report: {e}"))?;
    }

    Ok(())
}

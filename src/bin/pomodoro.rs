extern crate pomodoro;
use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use pomodoro::{EnvConditions, Error, PomodoroConfig};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(pomodoro::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let result = PomodoroConfig::from_args_safe(std::env::args_os()).and_then(|config| {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        pomodoro::run(&config, &EnvConditions::new(), &mut stdout)
    });

    if let Err(e) = result {
        match e {
            // stdout is what broke, so say so somewhere else
            Error::Io(_) => eprintln!("Application error: {}", e),
            _ => println!("{}", e),
        }
        process::exit(e.exit_code());
    }
}

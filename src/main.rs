use std::env;
use std::process;
use std::time::Duration;
use log::{error, info, LevelFilter};

mod boundary;
mod cli;
mod constants;
mod entities;
mod error;
mod output;
mod rendering;
mod scenario;
mod simulation;
mod types;

use crate::cli::{CliOptions, USAGE};
use crate::constants::LOG_FILE;
use crate::error::SimError;
use crate::output::OutputTarget;
use crate::simulation::Simulation;

fn main() {
    if let Err(e) = simple_logging::log_to_file(LOG_FILE, LevelFilter::Info) {
        eprintln!("logging disabled: {}", e);
    }
    let args: Vec<String> = env::args().skip(1).collect();
    process::exit(run(&args));
}

fn run(args: &[String]) -> i32 {
    let options = match cli::parse_args(args) {
        Ok(options) => options,
        Err(e) => {
            error!("Bad arguments: {}", e);
            eprintln!("{}\n\n{}", e, USAGE);
            return 2;
        }
    };
    if options.help {
        println!("{}", USAGE);
        return 0;
    }

    match simulate(&options) {
        Ok(()) => 0,
        Err(e) => exit_code(&e),
    }
}

fn simulate(options: &CliOptions) -> Result<(), SimError> {
    let mut config = scenario::build(options.scenario, options.seed, options.count);
    if let Some(ticks) = options.ticks {
        config = config.with_ticks(ticks);
    }
    info!("Scenario {:?} selected, preview: {}", options.scenario, options.preview);

    let marker = config.marker;
    let mut sim = Simulation::new(config);
    if options.preview {
        return rendering::preview(&mut sim, marker, Duration::from_millis(options.delay_ms));
    }

    let mut data = OutputTarget::stdout();
    let mut diag = OutputTarget::stderr();
    let outcome = sim.run(&mut data, &mut diag)?;
    info!("Outcome: {:?}", outcome);
    Ok(())
}

/// The out-of-bounds report is already on stderr; I/O failures are not.
fn exit_code(e: &SimError) -> i32 {
    match e {
        SimError::OutOfBounds { .. } => 1,
        SimError::Io(io_err) => {
            error!("Output failed: {}", io_err);
            eprintln!("{}", e);
            1
        }
    }
}

// File: services/booking_invite_cli/src/main.rs
mod cli;

use booking_common::BookingError;
use booking_config::load_config;
use cli::CliOptions;
use std::env;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    booking_common::init();

    let options = match CliOptions::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}\n{}", e, cli::USAGE);
            return ExitCode::from(2);
        }
    };
    if options.help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let result = booking_common::log_result(run(&options), "Invite artifacts built", "Invite build failed");
    match result {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        // bad payloads and internal failures get different codes
        Err(e) if e.is_validation() => ExitCode::from(2),
        Err(_) => ExitCode::FAILURE,
    }
}

fn run(options: &CliOptions) -> Result<String, BookingError> {
    let config = Arc::new(load_config()?);
    let payload = cli::read_payload(options, io::stdin())?;
    cli::render_artifacts(&payload, config, options.localized)
}

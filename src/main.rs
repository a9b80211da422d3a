use std::process::ExitCode;

use clap::Parser;

use img_size_compress::cli::{Cli, Output};
use img_size_compress::runner::RunError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.quiet);

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Run-level errors carry their own user-facing wording.
            match err.downcast_ref::<RunError>() {
                Some(run_err) => output.fatal(run_err),
                None => output.fatal(&format!("Error: {:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}

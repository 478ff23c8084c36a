use std::process::ExitCode;

use vtes_guess_cli::error::CliError;

fn main() -> ExitCode {
    match vtes_guess_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

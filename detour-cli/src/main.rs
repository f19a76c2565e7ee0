//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use detour_cli::CliError;

fn main() {
    if let Err(err) = detour_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            // Help and version requests are reported through clap's own exit path.
            clap_err.exit();
        }
        eprintln!("detour: {err}");
        std::process::exit(1);
    }
}

// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use mdtotex::cli::CliArgs;

fn main() -> ExitCode {
    mdtotex::logging::init();

    if std::env::args_os().len() <= 1 {
        return match CliArgs::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let args = CliArgs::parse();
    match mdtotex::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "conversion failed");
            eprintln!("mdtotex: {err}");
            ExitCode::FAILURE
        }
    }
}

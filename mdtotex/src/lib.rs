// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use error::{CliError, Result};

/// Reads the inputs, converts them and persists the result. Nothing is written when the
/// conversion fails.
pub fn run(args: &cli::CliArgs) -> Result<()> {
    if args.inputs.is_empty() {
        return Err(CliError::NoInput);
    }

    let options = config::load_options(args.config.as_deref())?;
    let markdown = input::read_inputs(&args.inputs)?;
    let latex = mdtotex_core::compile_str_with_options(&markdown, &options)?;
    output::write_output(args.output.as_deref(), &latex)
}

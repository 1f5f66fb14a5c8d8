// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::PathBuf;

use clap::Parser;

/// Convert Markdown files or directories of Markdown files into LaTeX.
#[derive(Parser, Debug)]
#[command(version)]
pub struct CliArgs {
    /// Markdown files, or directories whose `.md` files are converted in name order.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output file, or an existing directory that receives `content.tex`.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

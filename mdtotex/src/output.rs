// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "content.tex";

/// Where the LaTeX ends up: an existing directory receives `content.tex`.
pub fn resolve_output_path(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(DEFAULT_OUTPUT_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

pub fn write_output(output: Option<&Path>, latex: &str) -> Result<()> {
    let Some(output) = output else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(latex.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(CliError::Stdout)?;
        return Ok(());
    };

    let path = resolve_output_path(output);
    tracing::debug!(path = %path.display(), "writing latex");
    fs::write(&path, latex).map_err(|source| CliError::Write { path, source })
}

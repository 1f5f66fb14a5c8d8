// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::Path;

use mdtotex_core::Options;

use crate::error::{CliError, Result};

/// Loads the YAML options named by `--config`, or the defaults when none is given.
pub fn load_options(path: Option<&Path>) -> Result<Options> {
    let Some(path) = path else {
        return Ok(Options::default());
    };

    let options = mdtotex_core::config::load_options_from_yaml_file(path).map_err(|source| {
        CliError::Config {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(config = %path.display(), ?options, "loaded options");
    Ok(options)
}

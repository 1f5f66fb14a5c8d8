// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

pub mod config;
mod document;
pub mod error;
pub mod escape;
pub mod extension;
pub mod node;
pub mod renderer;
pub mod scanner;
pub mod table;

pub use config::Options;
pub use error::{Error, Result};
pub use node::Node;
pub use renderer::{ESCAPE_HATCH_MARKER, Renderer};

use document::Document;
use extension::{InlineExtension, registered_extensions};

pub fn compile_str(markdown: &str) -> Result<String> {
    compile_str_with_options(markdown, &Options::default())
}

pub fn compile_str_with_options(markdown: &str, options: &Options) -> Result<String> {
    Converter::new(options.clone()).convert(markdown)
}

/// An immutable conversion setup: the renderer table plus the ordered inline extensions.
///
/// Nothing is shared between conversions, so one converter can be reused for any number of
/// documents.
pub struct Converter {
    renderer: Renderer,
    extensions: Vec<Box<dyn InlineExtension>>,
}

impl Converter {
    pub fn new(options: Options) -> Self {
        let extensions = registered_extensions(&options);
        tracing::debug!(
            extensions = ?extensions.iter().map(|e| e.name()).collect::<Vec<_>>(),
            "registered inline extensions"
        );
        Self {
            renderer: Renderer::new(options),
            extensions,
        }
    }

    /// Converts Markdown into LaTeX fragments. Fails without partial output on the first
    /// unsupported construct.
    pub fn convert(&self, markdown: &str) -> Result<String> {
        let scanned = scanner::scan(markdown, &self.extensions);
        tracing::debug!(tokens = scanned.tokens.len(), "scanned inline extensions");

        let arena = comrak::Arena::new();
        let comrak_options = comrak_options();
        let root = comrak::parse_document(&arena, &scanned.markdown, &comrak_options);

        Document {
            renderer: &self.renderer,
            scanned: &scanned,
        }
        .render_root(root)
    }
}

fn comrak_options() -> comrak::Options<'static> {
    let mut options = comrak::Options::default();
    options.extension.autolink = true;
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.tasklist = true;
    options
}

// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Inline syntax recognized ahead of the generic Markdown inline rules.

mod citation;
mod math;

pub use citation::{AuthorKeyCitation, CaretCitation, Citation, CitationEntry};
pub use math::InlineMath;

use crate::config::{CitationStyle, Options};

/// A lexical rule that competes for the earliest position in unconsumed inline source.
pub trait InlineExtension {
    fn name(&self) -> &'static str;

    /// Byte index of the earliest place this rule could match in `src`.
    fn start(&self, src: &str) -> Option<usize>;

    /// Tokenizes a match anchored at the beginning of `src`.
    fn tokenize(&self, src: &str) -> Option<Recognized>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtensionToken {
    Math { expression: String },
    Citation(Citation),
}

/// A token together with the number of source bytes it consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recognized {
    pub token: ExtensionToken,
    pub len: usize,
}

/// Extensions in registration order; earlier entries win ties on start position.
pub fn registered_extensions(options: &Options) -> Vec<Box<dyn InlineExtension>> {
    let citation: Box<dyn InlineExtension> = match options.citation_style {
        CitationStyle::Caret => Box::new(CaretCitation),
        CitationStyle::AuthorKey => Box::new(AuthorKeyCitation),
    };
    vec![Box::new(InlineMath), citation]
}

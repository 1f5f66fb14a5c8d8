// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use crate::table::TableRow;

/// One parsed Markdown construct.
///
/// Child content is already rendered LaTeX by the time a node is built, except for the leaf
/// payloads of [`Node::Text`] and [`Node::CodeSpan`], which carry HTML-escaped source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
    HorizontalRule,
    List { body: String, ordered: bool },
    ListItem { text: String },
    Checkbox,
    Table {
        header: Option<TableRow>,
        body: Vec<TableRow>,
    },
    CodeBlock { code: String, language: String },
    BlockQuote { text: String },
    Html { html: String },
    Strong { text: String },
    Emphasis { text: String },
    CodeSpan { code: String },
    LineBreak,
    Strikethrough { text: String },
    Link {
        href: String,
        title: Option<String>,
        text: String,
    },
    Image {
        href: String,
        title: Option<String>,
        text: String,
        alt: String,
    },
    Text { text: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn new(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    pub fn command(self) -> &'static str {
        match self {
            Self::H1 => "chapter",
            Self::H2 => "section",
            Self::H3 => "subsection",
            Self::H4 => "subsubsection",
            Self::H5 => "paragraph",
            Self::H6 => "subparagraph",
        }
    }
}

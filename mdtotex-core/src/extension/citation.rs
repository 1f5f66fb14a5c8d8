// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExtensionToken, InlineExtension, Recognized};
use crate::escape::escape_for_latex;

static CARET_CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\^\[([^\^\[\]\n]+)\]").unwrap());
static DIRECT_CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@([A-Za-z0-9]+)(?: \[([^\[\]\n]+)\])?").unwrap());
static CITATION_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(@[^\[\]\n]+)\]").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Citation {
    /// `^[Author, page]` or `^[Author, (page)]`.
    Caret {
        author: String,
        parenthesized: bool,
        page: Option<String>,
    },
    /// `@key [pinpoint]`.
    Direct(CitationEntry),
    /// `[@key1, page1; @key2]`.
    Group(Vec<CitationEntry>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitationEntry {
    pub key: String,
    pub page: Option<String>,
}

impl Citation {
    pub fn render(&self) -> String {
        match self {
            Self::Caret {
                author,
                parenthesized,
                page,
            } => {
                let (open, close) = if *parenthesized { ("(", ")") } else { ("", "") };
                match page {
                    Some(page) => format!(
                        "\\citeauthor{{{author}}} {open}\\citeyear{{{author}}}, {}{close}",
                        escape_for_latex(page)
                    ),
                    None => format!("\\citeauthor{{{author}}} {open}\\citeyear{{{author}}}{close}"),
                }
            }
            Self::Direct(entry) => {
                format!("\\citeauthor{{{}}} ({})", entry.key, render_citeyear(entry))
            }
            Self::Group(entries) => {
                let parts = entries
                    .iter()
                    .map(|entry| {
                        format!("\\citeauthor{{{}}} {}", entry.key, render_citeyear(entry))
                    })
                    .collect::<Vec<_>>();
                format!("({})", parts.join("; "))
            }
        }
    }
}

fn render_citeyear(entry: &CitationEntry) -> String {
    match &entry.page {
        Some(page) => format!("\\citeyear[{}]{{{}}}", non_breaking(page), entry.key),
        None => format!("\\citeyear{{{}}}", entry.key),
    }
}

fn non_breaking(page: &str) -> String {
    escape_for_latex(page)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("~")
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// `^[Author, optional-args]`.
pub struct CaretCitation;

impl InlineExtension for CaretCitation {
    fn name(&self) -> &'static str {
        "caret-citation"
    }

    fn start(&self, src: &str) -> Option<usize> {
        src.find("^[")
    }

    fn tokenize(&self, src: &str) -> Option<Recognized> {
        let caps = CARET_CITATION.captures(src)?;
        let (author, args) = match caps[1].split_once(',') {
            Some((author, args)) => (author, Some(args.trim())),
            None => (&caps[1], None),
        };
        let author = non_empty(author)?;

        let parenthesized = args.is_some_and(|args| {
            args.len() >= 2 && args.starts_with('(') && args.ends_with(')')
        });
        let page = match args {
            Some(args) if parenthesized => non_empty(&args[1..args.len() - 1]),
            Some(args) => non_empty(args),
            None => None,
        };

        Some(Recognized {
            token: ExtensionToken::Citation(Citation::Caret {
                author,
                parenthesized,
                page,
            }),
            len: caps[0].len(),
        })
    }
}

/// `@key [pinpoint]` and the bracketed group `[@key1, page1; @key2, page2]`.
pub struct AuthorKeyCitation;

impl InlineExtension for AuthorKeyCitation {
    fn name(&self) -> &'static str {
        "author-key-citation"
    }

    fn start(&self, src: &str) -> Option<usize> {
        let group = src.find("[@");
        let direct = src.char_indices().find_map(|(index, ch)| {
            let at_word_start = src[..index]
                .chars()
                .next_back()
                .is_none_or(|prev| !prev.is_alphanumeric());
            (ch == '@' && at_word_start).then_some(index)
        });
        match (group, direct) {
            (Some(group), Some(direct)) => Some(group.min(direct)),
            (group, direct) => group.or(direct),
        }
    }

    fn tokenize(&self, src: &str) -> Option<Recognized> {
        if src.starts_with("[@") {
            let caps = CITATION_GROUP.captures(src)?;
            let entries = caps[1]
                .split(';')
                .map(parse_group_entry)
                .collect::<Option<Vec<_>>>()?;
            return Some(Recognized {
                token: ExtensionToken::Citation(Citation::Group(entries)),
                len: caps[0].len(),
            });
        }

        let caps = DIRECT_CITATION.captures(src)?;
        Some(Recognized {
            token: ExtensionToken::Citation(Citation::Direct(CitationEntry {
                key: caps[1].to_string(),
                page: caps.get(2).and_then(|page| non_empty(page.as_str())),
            })),
            len: caps[0].len(),
        })
    }
}

fn parse_group_entry(entry: &str) -> Option<CitationEntry> {
    let rest = entry.trim().strip_prefix('@')?;
    let key_len = rest
        .find(|ch: char| !ch.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    if key_len == 0 {
        return None;
    }
    let (key, rest) = rest.split_at(key_len);
    let rest = rest.trim();
    let page = if rest.is_empty() {
        None
    } else {
        non_empty(rest.strip_prefix(',')?)
    };
    Some(CitationEntry {
        key: key.to_string(),
        page,
    })
}

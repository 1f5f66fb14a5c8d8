// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Runs the inline extensions over raw Markdown before `comrak` sees it.
//!
//! Every recognized span is replaced by a placeholder `<sentinel><index><sentinel>`. The
//! sentinel is a private-use character absent from the input, so placeholders survive Markdown
//! parsing as ordinary text and can be expanded again when text nodes are rendered.
//!
//! A private-use character is neither whitespace nor punctuation for the emphasis flanking
//! rules. When the span starts or ends with punctuation, the placeholder is wrapped in
//! [`PUNCTUATION_GUARD`] on that side so `*` and `_` next to it behave as they would next to
//! the source text.

use crate::extension::{ExtensionToken, InlineExtension};

/// ASCII punctuation with no meaning to the configured Markdown parser.
const PUNCTUATION_GUARD: char = '$';

pub struct ScannedToken {
    pub raw: String,
    pub token: ExtensionToken,
}

impl ScannedToken {
    fn guards(&self) -> (bool, bool) {
        let is_punctuation = |ch: Option<char>| ch.is_some_and(|ch| ch.is_ascii_punctuation());
        (
            is_punctuation(self.raw.chars().next()),
            is_punctuation(self.raw.chars().next_back()),
        )
    }
}

pub struct ScannedMarkdown {
    pub markdown: String,
    pub tokens: Vec<ScannedToken>,
    sentinel: char,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Token(usize),
}

impl ScannedMarkdown {
    /// Splits text into literal runs and token references, in source order.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut rest = text;
        while let Some((before, index, after)) = self.next_placeholder(rest) {
            if !before.is_empty() {
                segments.push(Segment::Text(before));
            }
            segments.push(Segment::Token(index));
            rest = after;
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest));
        }
        segments
    }

    /// Puts the original source back wherever a placeholder appears.
    pub fn restore(&self, text: &str) -> String {
        self.segments(text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => text,
                Segment::Token(index) => self.tokens[index].raw.as_str(),
            })
            .collect()
    }

    fn next_placeholder<'a>(&self, text: &'a str) -> Option<(&'a str, usize, &'a str)> {
        let mut offset = 0;
        while let Some(rel_open) = text[offset..].find(self.sentinel) {
            let open = offset + rel_open;
            let digits_start = open + self.sentinel.len_utf8();
            let close = text[digits_start..]
                .find(self.sentinel)
                .map(|rel| digits_start + rel)?;
            let index = text[digits_start..close]
                .parse::<usize>()
                .ok()
                .filter(|index| *index < self.tokens.len());
            let Some(index) = index else {
                offset = digits_start;
                continue;
            };

            let (leading, trailing) = self.tokens[index].guards();
            let mut before = &text[..open];
            let mut after = &text[close + self.sentinel.len_utf8()..];
            if leading {
                before = before.strip_suffix(PUNCTUATION_GUARD).unwrap_or(before);
            }
            if trailing {
                after = after.strip_prefix(PUNCTUATION_GUARD).unwrap_or(after);
            }
            return Some((before, index, after));
        }
        None
    }
}

pub fn scan(markdown: &str, extensions: &[Box<dyn InlineExtension>]) -> ScannedMarkdown {
    let mut scanner = Scanner {
        extensions,
        sentinel: choose_sentinel(markdown),
        out: String::with_capacity(markdown.len()),
        tokens: Vec::new(),
    };

    let mut fence: Option<Fence> = None;
    let mut containers = ListContainers::default();
    for line in markdown.split_inclusive('\n') {
        match fence {
            Some(open) => {
                if open.is_closed_by(line) {
                    fence = None;
                }
                scanner.out.push_str(line);
            }
            None => {
                let base = containers.enter(line);
                fence = Fence::open(line, base);
                if fence.is_some() {
                    scanner.out.push_str(line);
                } else {
                    containers.push_item(line, base);
                    scanner.scan_line(line);
                }
            }
        }
    }

    ScannedMarkdown {
        markdown: scanner.out,
        tokens: scanner.tokens,
        sentinel: scanner.sentinel,
    }
}

fn choose_sentinel(markdown: &str) -> char {
    for codepoint in 0xE000..=0xF8FF {
        let Some(ch) = char::from_u32(codepoint) else {
            continue;
        };
        if !markdown.contains(ch) {
            return ch;
        }
    }

    '\u{E000}'
}

/// Content columns of the list items enclosing the current line, innermost last.
#[derive(Default)]
struct ListContainers {
    columns: Vec<usize>,
}

impl ListContainers {
    /// Leaves the items the line is no longer indented into and returns the content column the
    /// line is measured from. Blank lines keep every item open.
    fn enter(&mut self, line: &str) -> usize {
        let (indent, rest) = indentation(line);
        if !rest.trim().is_empty() {
            while self.columns.last().is_some_and(|column| *column > indent) {
                self.columns.pop();
            }
        }
        self.base()
    }

    fn push_item(&mut self, line: &str, base: usize) {
        if let Some(column) = list_item_content_column(line, base) {
            self.columns.push(column);
        }
    }

    fn base(&self) -> usize {
        self.columns.last().copied().unwrap_or(0)
    }
}

fn list_item_content_column(line: &str, base: usize) -> Option<usize> {
    let (indent, rest) = indentation(line);
    if indent > base + 3 {
        return None;
    }
    let marker = if rest.starts_with(['-', '*', '+']) {
        1
    } else {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > 9 || !rest[digits..].starts_with(['.', ')']) {
            return None;
        }
        digits + 1
    };

    let after = &rest[marker..];
    if after.trim().is_empty() {
        return Some(indent + marker + 1);
    }
    let spaces = after.chars().take_while(|ch| *ch == ' ').count();
    match spaces {
        0 => None,
        1..=4 => Some(indent + marker + spaces),
        _ => Some(indent + marker + 1),
    }
}

/// Leading indentation in columns, with tabs advancing to the next multiple of four.
fn indentation(line: &str) -> (usize, &str) {
    let mut columns = 0;
    for (at, ch) in line.char_indices() {
        match ch {
            ' ' => columns += 1,
            '\t' => columns += 4 - columns % 4,
            _ => return (columns, &line[at..]),
        }
    }
    (columns, "")
}

#[derive(Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
    base: usize,
}

impl Fence {
    // Four columns past the enclosing content make an indented code block, not a fence.
    fn open(line: &str, base: usize) -> Option<Self> {
        let (indent, trimmed) = indentation(line);
        if indent > base + 3 {
            return None;
        }
        let marker = trimmed.chars().next().filter(|ch| matches!(ch, '`' | '~'))?;
        let len = trimmed.chars().take_while(|ch| *ch == marker).count();
        if len < 3 {
            return None;
        }
        let info = &trimmed[len..];
        if marker == '`' && info.contains('`') {
            return None;
        }
        Some(Self { marker, len, base })
    }

    fn is_closed_by(&self, line: &str) -> bool {
        let (indent, trimmed) = indentation(line);
        if indent > self.base + 3 {
            return false;
        }
        let len = trimmed.chars().take_while(|ch| *ch == self.marker).count();
        len >= self.len && trimmed[len..].trim().is_empty()
    }
}

enum Next {
    Extension(usize),
    Verbatim(usize),
}

struct Scanner<'e> {
    extensions: &'e [Box<dyn InlineExtension>],
    sentinel: char,
    out: String,
    tokens: Vec<ScannedToken>,
}

impl Scanner<'_> {
    fn scan_line(&mut self, line: &str) {
        let mut rest = line;
        while !rest.is_empty() {
            let verbatim = rest.find(['`', '\\']);
            let start = self.earliest_start(rest);
            let next = match (verbatim, start) {
                (None, None) => {
                    self.out.push_str(rest);
                    return;
                }
                (Some(verbatim), Some(start)) if start < verbatim => Next::Extension(start),
                (Some(verbatim), _) => Next::Verbatim(verbatim),
                (None, Some(start)) => Next::Extension(start),
            };

            rest = match next {
                Next::Extension(start) => {
                    self.out.push_str(&rest[..start]);
                    self.recognize(&rest[start..])
                }
                Next::Verbatim(at) => {
                    self.out.push_str(&rest[..at]);
                    self.copy_verbatim(&rest[at..])
                }
            };
        }
    }

    fn earliest_start(&self, src: &str) -> Option<usize> {
        self.extensions
            .iter()
            .filter_map(|extension| extension.start(src))
            .min()
    }

    // Extensions are tried in registration order, which settles ties on the start position.
    fn recognize<'s>(&mut self, src: &'s str) -> &'s str {
        for extension in self.extensions {
            if extension.start(src) != Some(0) {
                continue;
            }
            let Some(recognized) = extension.tokenize(src) else {
                continue;
            };
            if recognized.len == 0 || !src.is_char_boundary(recognized.len) {
                continue;
            }

            tracing::trace!(
                extension = extension.name(),
                raw = &src[..recognized.len],
                "recognized inline extension"
            );
            let index = self.tokens.len();
            let scanned = ScannedToken {
                raw: src[..recognized.len].to_string(),
                token: recognized.token,
            };
            let (leading, trailing) = scanned.guards();
            if leading {
                self.out.push(PUNCTUATION_GUARD);
            }
            self.out.push(self.sentinel);
            self.out.push_str(&index.to_string());
            self.out.push(self.sentinel);
            if trailing {
                self.out.push(PUNCTUATION_GUARD);
            }
            self.tokens.push(scanned);
            return &src[recognized.len..];
        }

        let first = src.chars().next().map_or(0, char::len_utf8);
        self.out.push_str(&src[..first]);
        &src[first..]
    }

    fn copy_verbatim<'s>(&mut self, src: &'s str) -> &'s str {
        if let Some(escaped) = src.strip_prefix('\\') {
            let len = '\\'.len_utf8() + escaped.chars().next().map_or(0, char::len_utf8);
            self.out.push_str(&src[..len]);
            return &src[len..];
        }

        let ticks = src.chars().take_while(|ch| *ch == '`').count();
        let end = find_closing_ticks(&src[ticks..], ticks)
            .map(|close| ticks + close + ticks)
            .unwrap_or(ticks);
        self.out.push_str(&src[..end]);
        &src[end..]
    }
}

fn find_closing_ticks(text: &str, ticks: usize) -> Option<usize> {
    let mut offset = 0;
    while let Some(rel) = text[offset..].find('`') {
        let start = offset + rel;
        let run = text[start..].chars().take_while(|ch| *ch == '`').count();
        if run == ticks {
            return Some(start);
        }
        offset = start + run;
    }
    None
}

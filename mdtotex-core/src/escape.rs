// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Conversions between HTML-escaped text, literal text and LaTeX text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HTML_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&([#\w]+);").unwrap());

/// Resolves `&name;`, `&#N;` and `&#xHEX;` entities left to right.
///
/// Only `colon` and `amp` are known by name; every other named entity resolves to nothing.
/// Numeric references outside the Unicode scalar range become U+FFFD.
pub fn unescape_html_entities(input: &str) -> String {
    HTML_ENTITY
        .replace_all(input, |caps: &Captures<'_>| resolve_entity(&caps[1]))
        .into_owned()
}

fn resolve_entity(name: &str) -> String {
    let name = name.to_lowercase();
    match name.as_str() {
        "colon" => return ":".to_string(),
        "amp" => return "&".to_string(),
        _ => {}
    }

    let Some(number) = name.strip_prefix('#') else {
        return String::new();
    };
    let code = match number.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => number.parse::<u32>(),
    };
    match code {
        Ok(code) => char::from_u32(code)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string(),
        Err(_) => String::new(),
    }
}

/// Escapes the ten LaTeX special characters `\ & % $ # _ { } ~ ^`.
///
/// Every character is replaced at most once, so the backslashes and braces introduced by an
/// escape are never escaped again. Word commands are terminated with `{}` instead of a
/// trailing space, which keeps following text from fusing with the command name.
pub fn escape_for_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}

const HTML_ESCAPES: [(&str, &str); 5] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Reverses exactly the five entities produced by [`escape_html`].
pub fn unescape_html(input: &str) -> String {
    HTML_ESCAPES
        .iter()
        .fold(input.to_string(), |text, (entity, literal)| {
            text.replace(entity, literal)
        })
}

pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn escape_href(url: &str) -> String {
    // TeX scans macro arguments before hyperref can sanitize them.
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '_' => out.push_str("\\_"),
            '&' => out.push_str("\\&"),
            '#' => out.push_str("\\#"),
            '%' => out.push_str("\\%"),
            _ => out.push(ch),
        }
    }
    out
}

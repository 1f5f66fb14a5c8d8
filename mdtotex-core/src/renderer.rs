// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! One rendering rule per [`Node`] kind.

use crate::config::{CodeBlockStyle, ImageStyle, MathDelimiters, Options};
use crate::escape::{escape_for_latex, escape_href, unescape_html, unescape_html_entities};
use crate::extension::ExtensionToken;
use crate::node::{HeadingLevel, Node};
use crate::table::render_table;
use crate::{Error, Result};

/// Reserved token that lets authors pass raw LaTeX through code spans and fenced blocks.
pub const ESCAPE_HATCH_MARKER: &str = "mdtotex";

#[derive(Clone, Debug, Default)]
pub struct Renderer {
    options: Options,
}

impl Renderer {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn render(&self, node: &Node) -> Result<String> {
        match node {
            Node::Heading { level, text } => Ok(render_heading(*level, text)),
            Node::Paragraph { text } => Ok(format!("{text}\n\n")),
            Node::HorizontalRule => Ok("\n\\clearpage\n\n".to_string()),
            Node::List { body, ordered } => Ok(render_list(body, *ordered)),
            Node::ListItem { text } => Ok(format!("\\item {}\n", text.trim_end_matches('\n'))),
            Node::Checkbox => Err(Error::unsupported(
                "checkbox",
                "Checkboxes are not supported. Use a plain list instead.",
            )),
            Node::Table { header, body } => Ok(render_table(header.as_ref(), body)),
            Node::CodeBlock { code, language } => self.render_code_block(code, language),
            Node::BlockQuote { text } => self.render_block_quote(text),
            Node::Html { .. } => Err(Error::unsupported("html", "HTML is not supported.")),
            Node::Strong { text } => Ok(format!("\\textbf{{{text}}}")),
            Node::Emphasis { text } => Ok(format!("\\emph{{{text}}}")),
            Node::CodeSpan { code } => Ok(render_code_span(code)),
            Node::LineBreak => Ok("\\\\".to_string()),
            Node::Strikethrough { text } => Err(Error::unsupported(
                "strikethrough",
                format!("Strikethrough is not supported. [\"{text}\"]"),
            )),
            Node::Link { href, text, .. } => {
                Ok(format!("\\href{{{}}}{{{text}}}", escape_href(href)))
            }
            Node::Image {
                href, text, alt, ..
            } => Ok(self.render_image(href, text, alt)),
            Node::Text { text } => Ok(escape_for_latex(&unescape_html_entities(text))),
        }
    }

    pub fn render_token(&self, token: &ExtensionToken) -> String {
        match token {
            ExtensionToken::Math { expression } => match self.options.math_delimiters {
                MathDelimiters::Dollars => format!("${expression}$"),
                MathDelimiters::Bare => expression.clone(),
            },
            ExtensionToken::Citation(citation) => citation.render(),
        }
    }

    fn render_code_block(&self, code: &str, language: &str) -> Result<String> {
        let code = code.strip_suffix('\n').unwrap_or(code);
        if language == ESCAPE_HATCH_MARKER {
            return Ok(format!("{code}\n\n"));
        }

        match self.options.code_block_style {
            CodeBlockStyle::RawOnly => Err(Error::unsupported(
                "code-block",
                "Code blocks are not supported.",
            )),
            CodeBlockStyle::Listing => {
                let language = if language.is_empty() { "text" } else { language };
                Ok(format!(
                    "\n\\begin{{minted}}[frame=lines, linenos]{{{language}}}\n{code}\n\\end{{minted}}\n\n"
                ))
            }
        }
    }

    fn render_block_quote(&self, text: &str) -> Result<String> {
        if !self.options.enable_block_quotes {
            return Err(Error::unsupported(
                "block-quote",
                "Blockquotes are not supported.",
            ));
        }
        Ok(format!(
            "\n\\begin{{quote}}\n{}\n\\end{{quote}}\n\n",
            text.trim_end_matches('\n')
        ))
    }

    fn render_image(&self, href: &str, text: &str, alt: &str) -> String {
        match self.options.image_style {
            ImageStyle::Input => format!("\\input{{{alt}}}"),
            ImageStyle::Figure => {
                let placement = if self.options.force_figure_strict_here {
                    "H"
                } else {
                    "h"
                };
                let lines = [
                    format!("\\begin{{figure}}[{placement}]"),
                    indent_line("\\centering"),
                    indent_line(format!("\\includegraphics{{{href}}}")),
                    indent_line(format!("\\caption{{{text}}}")),
                    indent_line(format!("\\label{{figure:{href}}}")),
                    "\\end{figure}".to_string(),
                ];
                format!("\n{}\n", lines.join("\n"))
            }
        }
    }
}

fn render_heading(level: HeadingLevel, text: &str) -> String {
    format!("\n\\{}{{{text}}}\n\n", level.command())
}

fn render_list(body: &str, ordered: bool) -> String {
    let env = if ordered { "enumerate" } else { "itemize" };
    format!("\n\\begin{{{env}}}\n{body}\\end{{{env}}}\n")
}

fn render_code_span(code: &str) -> String {
    let code = unescape_html(code);
    match code.strip_prefix(ESCAPE_HATCH_MARKER) {
        Some(raw) => raw.trim().to_string(),
        None => format!("\\texttt{{{}}}", escape_for_latex(&code)),
    }
}

fn indent_line(line: impl AsRef<str>) -> String {
    format!("{:4}{}", "", line.as_ref())
}

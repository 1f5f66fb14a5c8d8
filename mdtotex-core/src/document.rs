// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Bottom-up walk over the `comrak` tree.
//!
//! Children are rendered first and handed to the parent as strings, so a [`Node`] never sees
//! unrendered Markdown below it.

use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};

use crate::escape::escape_html;
use crate::node::{HeadingLevel, Node};
use crate::renderer::Renderer;
use crate::scanner::{ScannedMarkdown, Segment};
use crate::table::{Alignment, CellFlags, TableCell, TableRow};
use crate::{Error, Result};

pub(crate) struct Document<'r> {
    pub renderer: &'r Renderer,
    pub scanned: &'r ScannedMarkdown,
}

impl Document<'_> {
    pub fn render_root<'a>(&self, root: &'a AstNode<'a>) -> Result<String> {
        let mut out = String::new();
        let mut blocks = 0usize;
        for node in root.children() {
            out.push_str(&self.render_node(node)?);
            blocks += 1;
        }
        tracing::debug!(blocks, "rendered document");
        Ok(out)
    }

    fn render_node<'a>(&self, node: &'a AstNode<'a>) -> Result<String> {
        let ast = node.data.borrow();
        let built = match &ast.value {
            NodeValue::Document => return self.render_children(node),
            NodeValue::Paragraph => Node::Paragraph {
                text: self.render_children(node)?,
            },
            NodeValue::Heading(heading) => Node::Heading {
                level: HeadingLevel::new(heading.level).ok_or_else(|| {
                    Error::unsupported(
                        "heading",
                        format!("Heading level {} is not supported.", heading.level),
                    )
                })?,
                text: self.render_children(node)?,
            },
            NodeValue::ThematicBreak => Node::HorizontalRule,
            NodeValue::List(list) => Node::List {
                body: self.render_items(node, list.tight)?,
                ordered: matches!(list.list_type, ListType::Ordered),
            },
            NodeValue::Item(_) => Node::ListItem {
                text: self.render_item_body(node, false)?,
            },
            NodeValue::TaskItem(..) => Node::Checkbox,
            NodeValue::Table(table) => {
                let (header, body) = self.build_table_rows(node, &table.alignments)?;
                Node::Table { header, body }
            }
            NodeValue::CodeBlock(block) => Node::CodeBlock {
                code: self.scanned.restore(&block.literal),
                language: block
                    .info
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .to_string(),
            },
            NodeValue::BlockQuote => Node::BlockQuote {
                text: self.render_children(node)?,
            },
            NodeValue::HtmlBlock(html) => Node::Html {
                html: self.scanned.restore(&html.literal),
            },
            NodeValue::HtmlInline(html) => Node::Html {
                html: self.scanned.restore(html),
            },
            NodeValue::Strong => Node::Strong {
                text: self.render_children(node)?,
            },
            NodeValue::Emph => Node::Emphasis {
                text: self.render_children(node)?,
            },
            NodeValue::Code(code) => Node::CodeSpan {
                code: escape_html(&self.scanned.restore(&code.literal)),
            },
            NodeValue::LineBreak => Node::LineBreak,
            NodeValue::Strikethrough => Node::Strikethrough {
                text: self.scanned.restore(&collect_plain_text(node)),
            },
            NodeValue::Link(link) => Node::Link {
                href: self.scanned.restore(&link.url),
                title: non_empty(&link.title),
                text: self.render_children(node)?,
            },
            NodeValue::Image(link) => Node::Image {
                href: self.scanned.restore(&link.url),
                title: non_empty(&link.title),
                text: self.render_children(node)?,
                alt: self.scanned.restore(&collect_plain_text(node)),
            },
            NodeValue::Text(text) => return self.render_text_run(text),
            NodeValue::SoftBreak => return self.render_text_run("\n"),
            other => {
                let name = other.xml_node_name();
                return Err(Error::unsupported(
                    "markdown",
                    format!("Markdown construct `{name}` is not supported."),
                ));
            }
        };
        drop(ast);
        self.renderer.render(&built)
    }

    // Adjacent text and soft breaks form one run so that a recognized token splits it into
    // separately escaped spans.
    fn render_children<'a>(&self, node: &'a AstNode<'a>) -> Result<String> {
        let mut out = String::new();
        let mut run = String::new();
        for child in node.children() {
            match &child.data.borrow().value {
                NodeValue::Text(text) => {
                    run.push_str(text);
                    continue;
                }
                NodeValue::SoftBreak => {
                    run.push('\n');
                    continue;
                }
                _ => {}
            }
            out.push_str(&self.render_text_run(&run)?);
            run.clear();
            out.push_str(&self.render_node(child)?);
        }
        out.push_str(&self.render_text_run(&run)?);
        Ok(out)
    }

    fn render_text_run(&self, run: &str) -> Result<String> {
        let mut out = String::new();
        for segment in self.scanned.segments(run) {
            match segment {
                Segment::Text(text) => {
                    // comrak has already resolved entities; re-encode `&` so that the text
                    // rule's entity pass only undoes this step.
                    let node = Node::Text {
                        text: text.replace('&', "&amp;"),
                    };
                    out.push_str(&self.renderer.render(&node)?);
                }
                Segment::Token(index) => {
                    out.push_str(&self.renderer.render_token(&self.scanned.tokens[index].token));
                }
            }
        }
        Ok(out)
    }

    fn render_items<'a>(&self, list: &'a AstNode<'a>, tight: bool) -> Result<String> {
        let mut body = String::new();
        for item in list.children() {
            if matches!(item.data.borrow().value, NodeValue::Item(_)) {
                let node = Node::ListItem {
                    text: self.render_item_body(item, tight)?,
                };
                body.push_str(&self.renderer.render(&node)?);
            } else {
                body.push_str(&self.render_node(item)?);
            }
        }
        Ok(body)
    }

    fn render_item_body<'a>(&self, item: &'a AstNode<'a>, tight: bool) -> Result<String> {
        let mut text = String::new();
        for block in item.children() {
            let inline_paragraph =
                tight && matches!(block.data.borrow().value, NodeValue::Paragraph);
            if inline_paragraph {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str(&self.render_children(block)?);
            } else {
                text.push_str(&self.render_node(block)?);
            }
        }
        Ok(text)
    }

    fn build_table_rows<'a>(
        &self,
        table: &'a AstNode<'a>,
        alignments: &[TableAlignment],
    ) -> Result<(Option<TableRow>, Vec<TableRow>)> {
        let mut header = None;
        let mut body = Vec::new();
        for (row_index, row) in table.children().enumerate() {
            if !matches!(row.data.borrow().value, NodeValue::TableRow(..)) {
                continue;
            }

            let mut cells = TableRow::default();
            for (column, cell) in row.children().enumerate() {
                let flags = CellFlags {
                    align: alignments.get(column).copied().and_then(cell_alignment),
                };
                cells.push(TableCell::new(self.render_children(cell)?, flags));
            }

            if row_index == 0 {
                header = Some(cells);
            } else {
                body.push(cells);
            }
        }
        Ok((header, body))
    }
}

fn cell_alignment(alignment: TableAlignment) -> Option<Alignment> {
    match alignment {
        TableAlignment::Left => Some(Alignment::Left),
        TableAlignment::Center => Some(Alignment::Center),
        TableAlignment::Right => Some(Alignment::Right),
        TableAlignment::None => None,
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn collect_plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    collect_plain_text_to(node, &mut out);
    out
}

fn collect_plain_text_to<'a>(node: &'a AstNode<'a>, out: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => out.push_str(text),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => collect_plain_text_to(child, out),
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal XML element tree and pretty printer.
//!
//! Bugs Everywhere import files use elements and text only: no attributes,
//! no mixed content. An element either holds text or child elements.

use std::borrow::Cow;

/// Declaration line written at the top of every document.
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Indentation added per nesting level.
const INDENT: &str = "  ";

/// An XML element with optional text and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Creates an element holding only text.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends a text-only child.
    pub fn push_leaf(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.children.push(Element::leaf(name, text));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.find(name).and_then(Element::text)
    }
}

/// Escape text content (`&`, `<`, `>`).
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render a complete document: declaration, then `root` indented two
/// spaces per level, ending with a newline.
pub fn render(root: &Element) -> String {
    let mut out = String::new();
    out.push_str(DECLARATION);
    out.push('\n');
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push('<');
    out.push_str(&element.name);

    if element.children.is_empty() {
        match &element.text {
            Some(text) => {
                out.push('>');
                out.push_str(&escape(text));
                push_close(out, &element.name);
            }
            None => out.push_str(" />"),
        }
        out.push('\n');
        return;
    }

    out.push('>');
    if let Some(text) = &element.text {
        out.push_str(&escape(text));
    }
    out.push('\n');
    for child in &element.children {
        write_element(out, child, depth + 1);
    }
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    push_close(out, &element.name);
    out.push('\n');
}

fn push_close(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;

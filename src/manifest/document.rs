//! In-memory model of a generated Android manifest.
//!
//! The project generator emits a small, regular subset of XML: a declaration
//! line, comments, and nested elements with quoted attributes. This module
//! parses that subset into a tree of [`Element`]s and serializes it back
//! deterministically. Text content between tags carries no meaning in a
//! generated manifest and is not preserved.

use anyhow::{bail, Context, Result};

/// A single element: name, ordered attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, including any namespace prefix (e.g. `uses-permission`).
    pub name: String,
    /// Attributes in document order as (name, value) pairs.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by exact name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing one in place or appending.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// First child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Mutable access to the first child with the given tag name.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// All children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// A parsed manifest: the XML declaration line plus the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument {
    /// Raw declaration line (`<?xml ...?>`), if the source had one.
    pub declaration: Option<String>,
    /// The root element (`manifest` in a well-formed file).
    pub root: Element,
}

impl ManifestDocument {
    /// Parse manifest text into a document tree.
    pub fn parse(input: &str) -> Result<Self> {
        Parser::new(input)
            .parse_document()
            .context("Failed to parse manifest")
    }

    /// Serialize back to manifest text.
    ///
    /// Output is deterministic: 4-space indent per depth, attributes in
    /// stored order, self-closing form for childless elements, trailing
    /// newline. Serializing a freshly parsed document and re-parsing it
    /// yields an equal tree.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        match &self.declaration {
            Some(decl) => out.push_str(decl),
            None => out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>"),
        }
        out.push('\n');
        write_element(&mut out, &self.root, 0);
        out
    }
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    let indent = "    ".repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        // Generated manifests use double quotes; fall back to single quotes
        // for the rare value that contains one.
        if value.contains('"') {
            out.push_str(&format!("='{}'", value));
        } else {
            out.push_str(&format!("=\"{}\"", value));
        }
    }
    if element.children.is_empty() {
        out.push_str(" />\n");
    } else {
        out.push_str(">\n");
        for child in &element.children {
            write_element(out, child, depth + 1);
        }
        out.push_str(&indent);
        out.push_str(&format!("</{}>\n", element.name));
    }
}

/// Cursor-based parser over the manifest text.
struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn parse_document(&mut self) -> Result<ManifestDocument> {
        let declaration = self.read_declaration()?;

        let mut root: Option<Element> = None;
        // Stack of open elements; the cursor sits inside the innermost one.
        let mut stack: Vec<Element> = Vec::new();

        loop {
            self.skip_text();
            if self.at_end() {
                break;
            }

            if self.eat("<!--") {
                self.skip_past("-->")
                    .context("Unterminated comment")?;
                continue;
            }

            if self.eat("</") {
                let name = self.read_name()?;
                self.skip_whitespace();
                if !self.eat(">") {
                    bail!("Malformed closing tag </{}>", name);
                }
                let element = stack
                    .pop()
                    .with_context(|| format!("Closing tag </{}> with no open element", name))?;
                if element.name != name {
                    bail!(
                        "Mismatched closing tag: expected </{}>, found </{}>",
                        element.name,
                        name
                    );
                }
                self.finish_element(element, &mut stack, &mut root)?;
                continue;
            }

            if !self.eat("<") {
                bail!("Expected '<' at offset {}", self.pos);
            }
            let mut element = Element::new(self.read_name()?);
            let self_closing = self.read_attributes(&mut element)?;
            if self_closing {
                self.finish_element(element, &mut stack, &mut root)?;
            } else {
                stack.push(element);
            }
        }

        if let Some(open) = stack.last() {
            bail!("Unclosed element <{}>", open.name);
        }
        let root = root.context("No root element found")?;
        Ok(ManifestDocument { declaration, root })
    }

    /// Attach a completed element to its parent, or make it the root.
    fn finish_element(
        &self,
        element: Element,
        stack: &mut Vec<Element>,
        root: &mut Option<Element>,
    ) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => {
                if root.is_some() {
                    bail!("Multiple root elements (second is <{}>)", element.name);
                }
                *root = Some(element);
            }
        }
        Ok(())
    }

    /// Read attributes up to the end of an open tag.
    ///
    /// Returns true if the tag was self-closing (`/>`).
    fn read_attributes(&mut self, element: &mut Element) -> Result<bool> {
        loop {
            self.skip_whitespace();
            if self.eat("/>") {
                return Ok(true);
            }
            if self.eat(">") {
                return Ok(false);
            }
            if self.at_end() {
                bail!("Unterminated tag <{}>", element.name);
            }

            let name = self.read_name()?;
            self.skip_whitespace();
            if !self.eat("=") {
                bail!("Attribute '{}' on <{}> has no value", name, element.name);
            }
            self.skip_whitespace();
            let quote = match self.next_char() {
                Some(c @ ('"' | '\'')) => c,
                _ => bail!("Attribute '{}' on <{}> is not quoted", name, element.name),
            };
            let value = self
                .read_until_char(quote)
                .with_context(|| format!("Unterminated value for attribute '{}'", name))?;
            element.attributes.push((name, value));
        }
    }

    fn read_declaration(&mut self) -> Result<Option<String>> {
        self.skip_whitespace();
        if !self.peek_is("<?") {
            return Ok(None);
        }
        let start = self.pos;
        self.skip_past("?>").context("Unterminated XML declaration")?;
        Ok(Some(self.chars[start..self.pos].iter().collect()))
    }

    /// Read a tag or attribute name.
    fn read_name(&mut self) -> Result<String> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | ':' | '.') {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            bail!("Expected a name at offset {}", start);
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn read_until_char(&mut self, end: char) -> Result<String> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == end {
                let value = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                return Ok(value);
            }
            self.pos += 1;
        }
        bail!("Reached end of input looking for {:?}", end);
    }

    /// Skip inter-tag text; generated manifests hold nothing meaningful there.
    fn skip_text(&mut self) {
        while let Some(c) = self.peek() {
            if c == '<' {
                break;
            }
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn skip_past(&mut self, marker: &str) -> Result<()> {
        while !self.at_end() {
            if self.eat(marker) {
                return Ok(());
            }
            self.pos += 1;
        }
        bail!("Reached end of input looking for {:?}", marker);
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn peek_is(&self, s: &str) -> bool {
        self.chars[self.pos..]
            .iter()
            .zip(s.chars())
            .filter(|(a, b)| **a == *b)
            .count()
            == s.chars().count()
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.peek_is(s) {
            self.pos += s.chars().count();
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

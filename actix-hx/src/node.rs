use std::fmt::{self, Write};
use std::io;

const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A piece of an HTML document.
///
/// Attributes are nodes too: an [`Node::Attr`] placed among an element's children is
/// written into the element's opening tag, everything else goes between the tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on render.
    Text(String),
    /// Markup written exactly as given.
    Raw(String),
    Attr(Attribute),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    children: Vec<Node>,
}

/// A single HTML attribute.
///
/// The value is escaped on render unless the attribute was built with
/// [`Attribute::raw`], in which case the caller guarantees it contains no `"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
    escape: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
            escape: true,
        }
    }

    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
            escape: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn escapes(&self) -> bool {
        self.escape
    }

    pub fn render<W: Write>(&self, w: &mut W) -> fmt::Result {
        write!(w, " {}=\"", self.name)?;
        if self.escape {
            escape_into(w, &self.value)?;
        } else {
            w.write_str(&self.value)?;
        }
        w.write_char('"')
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    pub fn render<W: Write>(&self, w: &mut W) -> fmt::Result {
        write!(w, "<{}", self.tag)?;
        for attribute in self.attributes() {
            attribute.render(w)?;
        }
        w.write_char('>')?;

        if self.is_void() {
            return Ok(());
        }

        for child in self.children.iter().filter(|c| !matches!(c, Node::Attr(_))) {
            child.render(w)?;
        }
        write!(w, "</{}>", self.tag)
    }

    fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.children.iter().filter_map(|child| match child {
            Node::Attr(attribute) => Some(attribute),
            _ => None,
        })
    }
}

impl Node {
    /// Render into any formatter sink. Errors come only from the writer.
    pub fn render<W: Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            Node::Element(element) => element.render(w),
            Node::Text(text) => escape_into(w, text),
            Node::Raw(markup) => w.write_str(markup),
            Node::Attr(attribute) => attribute.render(w),
        }
    }

    /// Render into a byte sink such as a socket or file.
    pub fn write_to<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.to_string().as_bytes())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Attribute> for Node {
    fn from(attribute: Attribute) -> Self {
        Node::Attr(attribute)
    }
}

/// Build an element from its tag and children (attributes included).
pub fn el<I>(tag: impl Into<String>, children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    Node::Element(Element {
        tag: tag.into(),
        children: children.into_iter().collect(),
    })
}

pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw(markup.into())
}

/// An escaped attribute with an arbitrary name.
pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Node {
    Node::Attr(Attribute::new(name, value))
}

/// Prefix `html` with the HTML5 doctype.
pub fn doctype(html: Node) -> Node {
    Node::Raw(format!("<!doctype html>{html}"))
}

fn escape_into<W: Write>(w: &mut W, input: &str) -> fmt::Result {
    let mut last = 0;
    for (i, ch) in input.char_indices() {
        let entity = match ch {
            '&' => "&amp;",
            '\'' => "&#39;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&#34;",
            _ => continue,
        };
        w.write_str(&input[last..i])?;
        w.write_str(entity)?;
        last = i + ch.len_utf8();
    }
    w.write_str(&input[last..])
}

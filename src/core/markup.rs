// src/core/markup.rs
// Small XML reader for the card database.
// Builds an element tree (names, children, text). Attributes are scanned and
// dropped; declarations, comments and DOCTYPE are skipped. Anything unbalanced
// or unterminated is an error.

use std::cell::Cell;

use crate::error::{Result, SpoilerError};
use super::sanitize::{decode_entities, normalize_newlines};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub children: Vec<Element>,
    /// Concatenated direct text and CDATA, entities decoded.
    pub text: String,
    /// 1-based line of the opening tag.
    pub line: usize,
}

impl Element {
    /// First child with exactly this name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First child whose name matches ignoring ASCII case.
    pub fn child_ci(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// Parse a whole document and return its root element.
/// Line endings are normalized first, so no text ever carries a `\r`.
pub fn parse_document(src: &str) -> Result<Element> {
    let src = normalize_newlines(src);
    Reader::new(&src).read()
}

struct Reader<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
    // (byte offset, line at that offset); tags are visited in order, so counting resumes
    lines: Cell<(usize, usize)>,
}

impl<'a> Reader<'a> {
    fn new(s: &'a str) -> Self {
        // tolerate a UTF-8 BOM
        let s = s.strip_prefix('\u{feff}').unwrap_or(s);
        Self { s, b: s.as_bytes(), i: 0, n: s.len(), lines: Cell::new((0, 1)) }
    }

    fn line_at(&self, pos: usize) -> usize {
        let pos = pos.min(self.n);
        let (mut from, mut line) = self.lines.get();
        if pos < from {
            (from, line) = (0, 1);
        }
        line += self.b[from..pos].iter().filter(|&&c| c == b'\n').count();
        self.lines.set((pos, line));
        line
    }

    fn err(&self, pos: usize, msg: impl Into<String>) -> SpoilerError {
        SpoilerError::parse(self.line_at(pos), msg)
    }

    fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Advance past `pat`, which must occur ahead. `what` names the construct for errors.
    fn skip_past(&mut self, pat: &str, what: &str) -> Result<&'a str> {
        let start = self.i;
        let rel = self.rest().find(pat).ok_or_else(|| self.err(start, format!("unterminated {what}")))?;
        let body = &self.s[start..start + rel];
        self.i = start + rel + pat.len();
        Ok(body)
    }

    fn read(mut self) -> Result<Element> {
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        while self.i < self.n {
            if self.b[self.i] != b'<' {
                self.read_text(&mut stack)?;
                continue;
            }
            let at = self.i;
            let rest = self.rest();
            if rest.starts_with("<?") {
                self.skip_past("?>", "processing instruction")?;
            } else if rest.starts_with("<!--") {
                self.skip_past("-->", "comment")?;
            } else if rest.starts_with("<![CDATA[") {
                self.i += "<![CDATA[".len();
                let body = self.skip_past("]]>", "CDATA section")?;
                match stack.last_mut() {
                    Some(open) => open.text.push_str(body),
                    None => return Err(self.err(at, "CDATA outside the root element")),
                }
            } else if rest.starts_with("<!") {
                if root.is_some() || !stack.is_empty() {
                    return Err(self.err(at, "declaration inside the document body"));
                }
                self.skip_declaration()?;
            } else if rest.starts_with("</") {
                let name = self.read_end_tag()?;
                let el = stack.pop().ok_or_else(|| self.err(at, format!("unexpected </{name}>")))?;
                if el.name != name {
                    return Err(self.err(at, format!("expected </{}>, found </{name}>", el.name)));
                }
                attach(&mut stack, &mut root, el);
            } else {
                if root.is_some() && stack.is_empty() {
                    return Err(self.err(at, "more than one root element"));
                }
                let (name, self_closing) = self.read_start_tag()?;
                let el = Element { name, line: self.line_at(at), ..Element::default() };
                if self_closing {
                    attach(&mut stack, &mut root, el);
                } else {
                    stack.push(el);
                }
            }
        }

        if let Some(open) = stack.last() {
            return Err(SpoilerError::parse(open.line, format!("<{}> is never closed", open.name)));
        }
        root.ok_or_else(|| SpoilerError::parse(1, "no root element"))
    }

    fn read_text(&mut self, stack: &mut [Element]) -> Result<()> {
        let start = self.i;
        let end = self.rest().find('<').map_or(self.n, |rel| start + rel);
        let raw = &self.s[start..end];
        self.i = end;

        match stack.last_mut() {
            Some(open) => {
                let text = decode_entities(raw).map_err(|m| self.err(start, m))?;
                open.text.push_str(&text);
            }
            None if raw.trim().is_empty() => {}
            None => return Err(self.err(start, "text outside the root element")),
        }
        Ok(())
    }

    fn read_name(&mut self) -> Result<String> {
        let start = self.i;
        while self.i < self.n {
            match self.b[self.i] {
                b' ' | b'\t' | b'\r' | b'\n' | b'/' | b'>' | b'=' | b'<' => break,
                _ => self.i += 1,
            }
        }
        if self.i == start {
            return Err(self.err(start, "missing tag name"));
        }
        Ok(self.s[start..self.i].to_string())
    }

    /// Current byte is '<'. Returns the tag name and whether it ends in "/>".
    fn read_start_tag(&mut self) -> Result<(String, bool)> {
        let at = self.i;
        self.i += 1;
        let name = self.read_name()?;

        let mut in_s = false; // '
        let mut in_d = false; // "
        let mut last_non_ws = b'<';
        while self.i < self.n {
            let c = self.b[self.i];
            match c {
                b'\'' if !in_d => in_s = !in_s,
                b'"' if !in_s => in_d = !in_d,
                b'<' if !in_s && !in_d => break,
                b'>' if !in_s && !in_d => {
                    self.i += 1;
                    return Ok((name, last_non_ws == b'/'));
                }
                _ => {}
            }
            if !c.is_ascii_whitespace() {
                last_non_ws = c;
            }
            self.i += 1;
        }
        Err(self.err(at, format!("unterminated <{name}> tag")))
    }

    fn read_end_tag(&mut self) -> Result<String> {
        let at = self.i;
        self.i += 2;
        let name = self.read_name()?;
        let body = self.skip_past(">", "end tag")?;
        if !body.trim().is_empty() {
            return Err(self.err(at, format!("junk in </{name}> tag")));
        }
        Ok(name)
    }

    /// `<!DOCTYPE ...>`, possibly with an internal `[ ... ]` subset.
    fn skip_declaration(&mut self) -> Result<()> {
        let at = self.i;
        let mut depth = 0usize;
        while self.i < self.n {
            match self.b[self.i] {
                b'[' => depth += 1,
                b']' => depth = depth.saturating_sub(1),
                b'>' if depth == 0 => {
                    self.i += 1;
                    return Ok(());
                }
                _ => {}
            }
            self.i += 1;
        }
        Err(self.err(at, "unterminated declaration"))
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None => *root = Some(el),
    }
}

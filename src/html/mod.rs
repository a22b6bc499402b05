//! HTML text-node walker
//!
//! Splits an input string into the runs of text that lie outside HTML tags,
//! comments, existing anchors and raw-text elements. Each run is reported
//! with its byte offset into the original input, so matches found inside a
//! run can be placed directly in document coordinates.

/// A run of text outside any markup, with its offset in the full input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextNode<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> TextNode<'a> {
    pub fn new(text: &'a str, offset: usize) -> Self {
        TextNode { text, offset }
    }

    /// Exclusive end offset of the run in the full input
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Entities that end a text run; matches never span them
const SPLIT_ENTITIES: [&str; 9] = [
    "&nbsp;", "&#160;", "&lt;", "&#60;", "&gt;", "&#62;", "&quot;", "&#34;", "&#39;",
];

/// Elements whose content is never scanned for links
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

#[derive(Debug, PartialEq, Eq)]
enum TagKind<'a> {
    Open { name: &'a str, self_closing: bool },
    Close { name: &'a str },
    /// Comment, doctype or processing instruction
    Other,
}

#[derive(Debug, PartialEq, Eq)]
struct Tag<'a> {
    len: usize,
    kind: TagKind<'a>,
}

/// Length of a run-splitting entity at the start of `rest`
fn entity_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    SPLIT_ENTITIES.iter().find_map(|entity| {
        let e = entity.as_bytes();
        (bytes.len() >= e.len() && bytes[..e.len()].eq_ignore_ascii_case(e)).then_some(e.len())
    })
}

/// Byte index of the first `>` outside quoted attribute values
///
/// Another `<` ends the search unmatched, so a failed scan never runs past
/// the next candidate tag.
fn find_tag_end(rest: &str, from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in rest.as_bytes().iter().enumerate().skip(from) {
        match quote {
            _ if b == b'<' => return None,
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some(i),
                _ => {}
            },
        }
    }
    None
}

/// Case-insensitive ASCII substring search
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let (h, n) = (haystack.as_bytes(), needle.as_bytes());
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn tag_name(rest: &str) -> &str {
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == ':'))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Parse a tag starting at the `<` at the beginning of `rest`
///
/// Returns `None` when the `<` does not start well-formed markup; it is then
/// ordinary text. `comment_closable` is false when no `-->` follows, so an
/// unterminated comment is rejected without scanning.
fn parse_tag(rest: &str, comment_closable: bool) -> Option<Tag<'_>> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }

    if rest.starts_with("<!--") {
        if !comment_closable {
            return None;
        }
        let close = rest[4..].find("-->")?;
        return Some(Tag {
            len: 4 + close + 3,
            kind: TagKind::Other,
        });
    }

    match bytes.get(1) {
        Some(b'!') | Some(b'?') => {
            let end = find_tag_end(rest, 2)?;
            Some(Tag {
                len: end + 1,
                kind: TagKind::Other,
            })
        }
        Some(b'/') if bytes.get(2).is_some_and(|b| b.is_ascii_alphabetic()) => {
            let name = tag_name(&rest[2..]);
            let end = find_tag_end(rest, 2 + name.len())?;
            Some(Tag {
                len: end + 1,
                kind: TagKind::Close { name },
            })
        }
        Some(b) if b.is_ascii_alphabetic() => {
            let name = tag_name(&rest[1..]);
            let end = find_tag_end(rest, 1 + name.len())?;
            Some(Tag {
                len: end + 1,
                kind: TagKind::Open {
                    name,
                    self_closing: rest[..end].ends_with('/'),
                },
            })
        }
        _ => None,
    }
}

/// Lazy iterator over the text nodes of an HTML (or plain text) string
///
/// # Example
///
/// ```
/// use autolink_rs::html::TextNodes;
///
/// let nodes: Vec<_> = TextNodes::new("Hi <b>there</b>").collect();
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[1].text, "there");
/// assert_eq!(nodes[1].offset, 6);
/// ```
#[derive(Debug, Clone)]
pub struct TextNodes<'a> {
    input: &'a str,
    pos: usize,
    anchor_depth: usize,
    /// Start of the last `-->` in the input
    last_comment_close: Option<usize>,
}

impl<'a> TextNodes<'a> {
    pub fn new(input: &'a str) -> Self {
        TextNodes {
            input,
            pos: 0,
            anchor_depth: 0,
            last_comment_close: input.rfind("-->"),
        }
    }

    /// Parse the tag starting at byte `at` of the input, if any
    fn tag_at(&self, at: usize) -> Option<Tag<'a>> {
        let input = self.input;
        let comment_closable = self.last_comment_close.is_some_and(|close| close >= at + 4);
        parse_tag(&input[at..], comment_closable)
    }

    fn handle_tag(&mut self, tag: &Tag<'a>) {
        self.pos += tag.len;
        match tag.kind {
            TagKind::Open {
                name,
                self_closing: false,
            } => {
                if name.eq_ignore_ascii_case("a") {
                    self.anchor_depth += 1;
                } else if let Some(raw) = RAW_TEXT_ELEMENTS
                    .iter()
                    .find(|raw| name.eq_ignore_ascii_case(raw))
                {
                    // Jump to the matching close tag; it is parsed on the next step.
                    let closing = format!("</{}", raw);
                    let input = self.input;
                    let from = self.pos;
                    self.pos = find_ci(&input[from..], &closing).map_or(input.len(), |i| from + i);
                }
            }
            TagKind::Close { name } if name.eq_ignore_ascii_case("a") => {
                self.anchor_depth = self.anchor_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// End of the text run starting at `self.pos`
    fn run_end(&self) -> usize {
        let rest = &self.input[self.pos..];
        rest.char_indices()
            .skip(1)
            .find(|&(i, c)| match c {
                '<' => self.tag_at(self.pos + i).is_some(),
                '&' => entity_len(&rest[i..]).is_some(),
                _ => false,
            })
            .map_or(self.input.len(), |(i, _)| self.pos + i)
    }
}

impl<'a> Iterator for TextNodes<'a> {
    type Item = TextNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        while self.pos < input.len() {
            let rest = &input[self.pos..];

            if let Some(tag) = self.tag_at(self.pos) {
                self.handle_tag(&tag);
                continue;
            }
            if let Some(len) = entity_len(rest) {
                self.pos += len;
                continue;
            }

            let start = self.pos;
            self.pos = self.run_end();
            if self.anchor_depth > 0 {
                continue;
            }
            return Some(TextNode::new(&input[start..self.pos], start));
        }
        None
    }
}

//! Cursor-driven scanning of a markup buffer.
//!
//! [`resolve_span`] finds the single tag under the cursor with a bracket scan
//! instead of a parser, so it keeps working while the rest of the document is
//! broken. [`positions`] reports the cursor's line, column and nesting depth.
//!
//! Offsets are byte offsets into the buffer. The scanner only inspects the
//! ASCII bytes `<`, `>` and `/`, so it never splits a UTF-8 sequence.

use std::fmt;

use crate::markup::tokenizer::{depth_at, tag_name};

// ---------------------------------------------------------------------------
// MarkupSpan
// ---------------------------------------------------------------------------

/// The opening (or self-closing) tag under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkupSpan {
    /// Offset of the `<`.
    pub start: usize,
    /// Offset of the `>` (inclusive).
    pub end: usize,
    /// Whether the tag is an opening tag whose element is closed elsewhere,
    /// as opposed to a self-closing `<Tag ... />`.
    pub needs_close_tag: bool,
}

impl MarkupSpan {
    /// The tag text within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..=self.end]
    }

    /// Length of the span in bytes.
    pub fn byte_len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// The element name of the tag.
    pub fn name<'a>(&self, source: &'a str) -> Option<&'a str> {
        tag_name(self.text(source))
    }

    /// Markup that parses on its own: the tag text, plus a synthesized
    /// `</Name>` when the tag is not self-closing.
    pub fn parse_text(&self, source: &str) -> String {
        let text = self.text(source);
        match (self.needs_close_tag, tag_name(text)) {
            (true, Some(name)) => format!("{text}</{name}>"),
            _ => text.to_string(),
        }
    }
}

/// Find the tag around `cursor`.
///
/// Scans left from the cursor for `<` and right for `>`. Returns `None` when
/// a `>` is met going left, a `<` is met going right, a buffer edge is
/// reached first, or the tag is a closing tag, a declaration (`<?`, `<!`), or
/// has no name. A cursor just after (or on) a `>` selects the tag that `>`
/// closes.
pub fn resolve_span(text: &str, cursor: usize) -> Option<MarkupSpan> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut probe = cursor.min(bytes.len());
    if probe > 0 && bytes[probe - 1] == b'>' {
        probe -= 1;
    }

    let left_from = match bytes.get(probe) {
        Some(b'>') | None => probe.checked_sub(1)?,
        Some(_) => probe,
    };

    let mut start = left_from;
    loop {
        match bytes[start] {
            b'<' => break,
            b'>' => return None,
            _ if start == 0 => return None,
            _ => start -= 1,
        }
    }

    let end = start + 1 + bytes[start + 1..].iter().position(|&b| b == b'>' || b == b'<')?;
    if bytes[end] == b'<' {
        return None;
    }

    let tag = &text[start..=end];
    tag_name(tag)?;

    let needs_close_tag = !tag[..tag.len() - 1].trim_end().ends_with('/');
    Some(MarkupSpan {
        start,
        end,
        needs_close_tag,
    })
}

// ---------------------------------------------------------------------------
// Cursor positions
// ---------------------------------------------------------------------------

/// Where the cursor is: zero-based line and column (in characters) plus the
/// number of elements open at the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
    pub indent: usize,
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line: {}, Col: {}, Indent: {}",
            self.line + 1,
            self.column + 1,
            self.indent
        )
    }
}

/// Compute the line, column and nesting depth at `cursor`.
pub fn positions(text: &str, cursor: usize) -> CursorPosition {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    let head = &text[..cursor];

    let line = head.matches('\n').count();
    let line_start = head.rfind('\n').map_or(0, |i| i + 1);
    CursorPosition {
        line,
        column: head[line_start..].chars().count(),
        indent: depth_at(text, cursor),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn span_text(text: &str, cursor: usize) -> Option<&str> {
        resolve_span(text, cursor).map(|s| s.text(text))
    }

    // ── Span resolution ──────────────────────────────────────────────

    #[test]
    fn cursor_inside_nested_tag() {
        let text = "<Grid><Button/></Grid>";
        let span = resolve_span(text, 9).unwrap();
        assert_eq!(span.text(text), "<Button/>");
        assert_eq!((span.start, span.end), (6, 14));
        assert!(!span.needs_close_tag);
    }

    #[test]
    fn needs_close_tag_detection() {
        let open = r#"<Label Text="x">"#;
        assert!(resolve_span(open, 3).unwrap().needs_close_tag);

        let closed = r#"<Label Text="x"/>"#;
        assert!(!resolve_span(closed, 3).unwrap().needs_close_tag);

        let spaced = r#"<Label Text="x" / >"#;
        assert!(!resolve_span(spaced, 3).unwrap().needs_close_tag);
    }

    #[test]
    fn cursor_on_either_side_of_angle_brackets() {
        let text = "<A/><B>";
        // Just before `<`.
        assert_eq!(span_text(text, 0), Some("<A/>"));
        // On the `>`.
        assert_eq!(span_text(text, 3), Some("<A/>"));
        // Just after `>` of <A/>, which is also just before <B>.
        assert_eq!(span_text(text, 4), Some("<A/>"));
        // After the final `>`.
        assert_eq!(span_text(text, 7), Some("<B>"));
    }

    #[test]
    fn closing_tags_and_declarations_are_not_editable() {
        let text = "<Grid></Grid>";
        assert_eq!(span_text(text, 8), None);
        assert_eq!(span_text(text, text.len()), None);
        assert_eq!(span_text("<?xml version=\"1.0\"?>", 3), None);
        assert_eq!(span_text("<!-- note -->", 5), None);
    }

    #[test]
    fn nameless_tags_yield_none() {
        assert_eq!(span_text("<>", 1), None);
        assert_eq!(span_text("< Button>", 3), None);
    }

    #[test]
    fn unterminated_tag_yields_none() {
        assert_eq!(span_text("<Button", 3), None);
        assert_eq!(span_text("<Button", 7), None);
        assert_eq!(span_text("<Button Text=\"a\" <Label/>", 4), None);
    }

    #[test]
    fn cursor_in_text_yields_none() {
        assert_eq!(span_text("<A>hello</A>", 5), None);
        assert_eq!(span_text("hello", 2), None);
        assert_eq!(span_text("", 0), None);
    }

    #[test]
    fn multibyte_text_is_safe() {
        let text = "<Label Text=\"héllo wörld\"/>";
        let cursor = text.find('w').unwrap();
        assert_eq!(span_text(text, cursor), Some(text));
    }

    #[test]
    fn parse_text_synthesizes_close() {
        let text = r#"<Label Text="x">"#;
        let span = resolve_span(text, 2).unwrap();
        assert_eq!(span.parse_text(text), r#"<Label Text="x"></Label>"#);
        assert_eq!(span.name(text), Some("Label"));

        let text = "<Button />";
        let span = resolve_span(text, 2).unwrap();
        assert_eq!(span.parse_text(text), "<Button />");
        assert_eq!(span.byte_len(), text.len());
    }

    // ── Positions ────────────────────────────────────────────────────

    #[test]
    fn positions_line_column_indent() {
        let text = "<Project>\n  <Grid>\n    <Button/>";
        let pos = positions(text, text.len());
        assert_eq!(pos, CursorPosition { line: 2, column: 13, indent: 2 });
        assert_eq!(pos.to_string(), "Line: 3, Col: 14, Indent: 2");
    }

    #[test]
    fn positions_counts_chars_not_bytes() {
        let text = "é<A>";
        assert_eq!(positions(text, 2).column, 1);
        // Mid-character cursor is floored.
        assert_eq!(positions(text, 1).column, 0);
    }
}

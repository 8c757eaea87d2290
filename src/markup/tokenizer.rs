//! logos-based markup tokenizer.
//!
//! This is a forgiving lexer for text that is being typed: it never fails,
//! it only classifies what it can and skips the rest. The editor uses it for
//! nesting depth and tag names, where a real XML parser would reject the
//! half-written documents it has to cope with.
//!
//! Quoted values may not contain `<`, so a stray apostrophe in element text
//! cannot swallow the tags that follow it.

use logos::Logos;

/// Markup token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // ── Tag openers (longer matches, defined first) ──────────────────

    /// `</Name`
    #[regex(r"</[A-Za-z_][A-Za-z0-9_.:-]*")]
    CloseTagOpen,

    /// `<Name`
    #[regex(r"<[A-Za-z_][A-Za-z0-9_.:-]*")]
    TagOpen,

    /// `<?` or `<!` (processing instructions, comments, doctypes).
    #[regex(r"<[?!]")]
    Declaration,

    /// `/>`
    #[token("/>")]
    SelfCloseEnd,

    // ── Values ───────────────────────────────────────────────────────

    /// `"..."` or `'...'`
    #[regex(r#""[^"<]*""#)]
    #[regex(r"'[^'<]*'")]
    Quoted,

    /// Anything else between delimiters.
    #[regex(r#"[^<>/"']+"#)]
    Text,

    // ── Single characters ────────────────────────────────────────────

    /// `>`
    #[token(">")]
    TagEnd,

    /// `<` not starting a tag.
    #[token("<")]
    Lt,

    /// `/` not followed by `>`.
    #[token("/")]
    Slash,
}

/// Tokenize `input` into `(token, byte range)` pairs, skipping unlexable bytes.
pub fn tokenize(input: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .collect()
}

/// The element name of a tag fragment starting with `<Name`.
pub fn tag_name(fragment: &str) -> Option<&str> {
    let mut lexer = Token::lexer(fragment);
    match lexer.next() {
        Some(Ok(Token::TagOpen)) => Some(&lexer.slice()[1..]),
        _ => None,
    }
}

/// Nesting depth at `offset`: opening tags whose `>` ends at or before the
/// offset count up, closing tags count down. Self-closing tags and
/// declarations do not count. Never negative.
pub fn depth_at(input: &str, offset: usize) -> usize {
    #[derive(Clone, Copy)]
    enum Open {
        Element,
        Closing,
        Other,
    }

    let mut depth: usize = 0;
    let mut open = None;
    for (token, span) in Token::lexer(input).spanned() {
        if span.end > offset {
            break;
        }
        match token {
            Ok(Token::TagOpen) => open = Some(Open::Element),
            Ok(Token::CloseTagOpen) => open = Some(Open::Closing),
            Ok(Token::Declaration) => open = Some(Open::Other),
            Ok(Token::SelfCloseEnd) => open = None,
            Ok(Token::TagEnd) => {
                match open.take() {
                    Some(Open::Element) => depth += 1,
                    Some(Open::Closing) => depth = depth.saturating_sub(1),
                    Some(Open::Other) | None => {}
                }
            }
            _ => {}
        }
    }
    depth
}

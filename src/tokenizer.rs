//! Lossless, total lexer for JSON-like text.
//!
//! Every character of the input is consumed by exactly one token, and
//! concatenating the `text` of all tokens in order reproduces the input
//! byte-for-byte. Unrecognized characters become single-char [`TokenKind::Unknown`]
//! tokens instead of errors.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Colon,
    Comma,
    /// Single- or double-quoted string; `text` keeps the original delimiters.
    String,
    Number,
    Boolean,
    Null,
    /// Bare word: `[a-zA-Z0-9_$./-]+` that is not a recognized literal.
    Identifier,
    Whitespace,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Exact source slice, original quoting and casing included.
    pub text: &'a str,
    /// Half-open byte offsets into the scanned input. Diagnostics only.
    pub start: usize,
    pub end: usize,
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '/' | '-')
}

/// Scan `input` into a flat token sequence. Single left-to-right pass,
/// never fails; lookahead is bounded by the literal being scanned.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0usize;
    while i < input.len() {
        let start = i;
        let c = match input[i..].chars().next() {
            Some(c) => c,
            None => break,
        };
        let kind = if c.is_whitespace() {
            i += c.len_utf8();
            while i < input.len() {
                let w = match input[i..].chars().next() {
                    Some(w) if w.is_whitespace() => w,
                    _ => break,
                };
                i += w.len_utf8();
            }
            TokenKind::Whitespace
        } else {
            match c {
                '{' => {
                    i += 1;
                    TokenKind::BraceOpen
                }
                '}' => {
                    i += 1;
                    TokenKind::BraceClose
                }
                '[' => {
                    i += 1;
                    TokenKind::BracketOpen
                }
                ']' => {
                    i += 1;
                    TokenKind::BracketClose
                }
                ':' => {
                    i += 1;
                    TokenKind::Colon
                }
                ',' => {
                    i += 1;
                    TokenKind::Comma
                }
                '"' | '\'' => {
                    i = scan_string(input, i, c as u8);
                    TokenKind::String
                }
                '-' if !next_is_digit(bytes, i + 1) => {
                    // Lone minus falls through to the bare-word rule below.
                    i = scan_ident(input, i);
                    classify_word(&input[start..i])
                }
                '-' | '0'..='9' => {
                    i = scan_number(bytes, i);
                    classify_number(&input[start..i])
                }
                c if is_ident_char(c) => {
                    i = scan_ident(input, i);
                    classify_word(&input[start..i])
                }
                other => {
                    i += other.len_utf8();
                    TokenKind::Unknown
                }
            }
        };
        tokens.push(Token {
            kind,
            text: &input[start..i],
            start,
            end: i,
        });
    }
    tokens
}

#[inline]
fn next_is_digit(bytes: &[u8], at: usize) -> bool {
    at < bytes.len() && bytes[at].is_ascii_digit()
}

/// Scan from the opening quote to the next unescaped matching quote.
/// A backslash and the character after it are consumed as a pair, so an
/// escaped quote never terminates the string. Unterminated strings run to
/// the end of the input.
fn scan_string(input: &str, start: usize, quote: u8) -> usize {
    let bytes = input.as_bytes();
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 1;
                if let Some(c) = input[i..].chars().next() {
                    i += c.len_utf8();
                }
            }
            b if b == quote => return i + 1,
            b if b < 0x80 => i += 1,
            _ => {
                if let Some(c) = input[i..].chars().next() {
                    i += c.len_utf8();
                } else {
                    break;
                }
            }
        }
    }
    input.len()
}

/// Numeric literal: optional sign, digits, optional `.digits`, optional
/// exponent. The `.` and the exponent marker are only consumed when followed
/// by a digit (after an optional exponent sign), so `1.` lexes as `1` + `.`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    if bytes[i] == b'-' {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' && next_is_digit(bytes, i + 1) {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if next_is_digit(bytes, j) {
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}

fn scan_ident(input: &str, start: usize) -> usize {
    let mut i = start;
    while i < input.len() {
        match input[i..].chars().next() {
            Some(c) if is_ident_char(c) => i += c.len_utf8(),
            _ => break,
        }
    }
    i
}

/// Leading-zero numerals like `007` or `007.5` are classified as bare words
/// so the rewriter quotes them instead of emitting a literal JSON rejects.
/// `0`, `0.5` and `-0` stay numbers.
fn classify_number(text: &str) -> TokenKind {
    let t = text.strip_prefix('-').unwrap_or(text);
    let b = t.as_bytes();
    if b.len() > 1 && b[0] == b'0' && b[1].is_ascii_digit() {
        TokenKind::Identifier
    } else {
        TokenKind::Number
    }
}

/// Case-insensitive literal folding. All "absence" spellings collapse to
/// null; anything unrecognized stays a bare identifier.
fn classify_word(text: &str) -> TokenKind {
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
        TokenKind::Boolean
    } else if text.eq_ignore_ascii_case("null")
        || text.eq_ignore_ascii_case("none")
        || text.eq_ignore_ascii_case("undefined")
        || text.eq_ignore_ascii_case("nan")
        || text.eq_ignore_ascii_case("infinity")
        || text.eq_ignore_ascii_case("-infinity")
    {
        TokenKind::Null
    } else {
        TokenKind::Identifier
    }
}

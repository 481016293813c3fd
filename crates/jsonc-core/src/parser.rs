//! Recursive-descent parser for the lenient JSON dialect.
//!
//! Accepts standard JSON extended with:
//!
//! - C-style `/* ... */` comments wherever whitespace is legal
//! - hexadecimal integer literals (`0x1F`), always integral
//! - stray, repeated, or trailing commas between container entries
//! - a leading `+` on numbers
//!
//! The document root must be an object or array; a bare scalar at the top
//! level is rejected, as is anything but trivia after the closing delimiter.
//! Parsing is a single left-to-right pass with character-level lookahead and
//! no backtracking: once a construct commits, any violation aborts the whole
//! parse with a [`ParseError`] pointing at the offending character. There is
//! no partial result and no recovery.
//!
//! # Key design decisions
//!
//! - **Explicit cursor**: one [`Cursor`] per `parse` call carries the
//!   absolute offset, 1-based line, and line-start offset, and is threaded
//!   by `&mut` through the mutually recursive `parse_value` /
//!   `parse_object` / `parse_array` / `parse_string` / `parse_number`
//!   functions. No global state, nothing shared between parses.
//! - **Comments are trivia**: `skip_trivia` consumes whitespace and comments
//!   as a plain function call between tokens; errors are never used for
//!   control flow. Newlines inside comments still advance the line counter.
//! - **Numbers split at the token level**: a fraction or exponent makes the
//!   literal a `Float`, anything else a 64-bit `Integer`. Inside a hex
//!   literal an `e` is a hex digit, never an exponent, and a `.` after hex
//!   digits is an error rather than a silent stop.

use crate::error::{ParseError, Result};
use crate::value::{Array, KeyMatch, Object, Value};

/// Construction-time parser configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Key comparison policy stamped onto every [`Object`] the parse builds.
    pub key_match: KeyMatch,
}

/// Parse a complete document with default options (case-insensitive keys).
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, ParseOptions::default())
}

/// Parse a complete document. The returned [`Value`] is always an
/// `Object` or `Array`; scalar roots fail.
pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Value> {
    let mut cur = Cursor::new(text, options.key_match);
    skip_trivia(&mut cur)?;
    let root = match cur.peek() {
        Some(b'{') => Value::Object(parse_object(&mut cur)?),
        Some(b'[') => Value::Array(parse_array(&mut cur)?),
        Some(_) => return Err(cur.error("document root must be an object or array")),
        None => return Err(cur.error("empty document")),
    };
    skip_trivia(&mut cur)?;
    if cur.peek().is_some() {
        return Err(cur.error("unexpected characters after document root"));
    }
    Ok(root)
}

/// The parsing context: a mutable cursor over the source text.
///
/// Owned exclusively by one `parse` invocation. `line_start` is the offset
/// just past the most recently consumed `\n`, which makes the current column
/// `offset - line_start` (counted in characters for diagnostics).
struct Cursor<'a> {
    src: &'a str,
    offset: usize,
    line: usize,
    line_start: usize,
    key_match: KeyMatch,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str, key_match: KeyMatch) -> Self {
        Self {
            src,
            offset: 0,
            line: 1,
            line_start: 0,
            key_match,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.offset).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.src.as_bytes().get(self.offset + ahead).copied()
    }

    /// Consume one byte, keeping the line bookkeeping current. Newlines are
    /// counted wherever they appear, comments included.
    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.offset += 1;
        if b == b'\n' {
            self.line += 1;
            self.line_start = self.offset;
        }
        Some(b)
    }

    fn expect(&mut self, expected: u8, message: &str) -> Result<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Build a [`ParseError`] at the current position, capturing the full
    /// source line as the snippet.
    fn error(&self, message: impl Into<String>) -> ParseError {
        let line_end = self.src[self.line_start..]
            .find('\n')
            .map(|i| self.line_start + i)
            .unwrap_or(self.src.len());
        let snippet = self.src[self.line_start..line_end]
            .trim_end_matches('\r')
            .to_string();
        let column = self.src[self.line_start..self.offset.min(line_end)]
            .chars()
            .count();
        ParseError {
            message: message.into(),
            line: self.line,
            column,
            offset: self.offset,
            snippet,
        }
    }
}

/// Skip whitespace (space, tab, CR, LF) and `/* ... */` comments. Legal
/// between any two tokens; comments never reach the tree.
fn skip_trivia(cur: &mut Cursor) -> Result<()> {
    loop {
        match cur.peek() {
            Some(b' ' | b'\t' | b'\r' | b'\n') => {
                cur.bump();
            }
            Some(b'/') => skip_comment(cur)?,
            _ => return Ok(()),
        }
    }
}

fn skip_comment(cur: &mut Cursor) -> Result<()> {
    cur.bump(); // the '/'
    if cur.peek() != Some(b'*') {
        return Err(cur.error("expected `*` after `/`"));
    }
    cur.bump();
    loop {
        match cur.bump() {
            Some(b'*') if cur.peek() == Some(b'/') => {
                cur.bump();
                return Ok(());
            }
            Some(_) => {}
            None => return Err(cur.error("unterminated comment")),
        }
    }
}

/// Dispatch on the first significant character of a value.
fn parse_value(cur: &mut Cursor) -> Result<Value> {
    match cur.peek() {
        Some(b'{') => Ok(Value::Object(parse_object(cur)?)),
        Some(b'[') => Ok(Value::Array(parse_array(cur)?)),
        Some(b'"') => Ok(Value::String(parse_string(cur)?)),
        Some(b't') => {
            expect_keyword(cur, "true")?;
            Ok(Value::Bool(true))
        }
        Some(b'f') => {
            expect_keyword(cur, "false")?;
            Ok(Value::Bool(false))
        }
        Some(b'n') => {
            expect_keyword(cur, "null")?;
            Ok(Value::Null)
        }
        Some(b) if b == b'+' || b == b'-' || b.is_ascii_digit() => parse_number(cur),
        Some(_) => Err(cur.error("expected a value")),
        None => Err(cur.error("unexpected end of input")),
    }
}

fn expect_keyword(cur: &mut Cursor, keyword: &str) -> Result<()> {
    for expected in keyword.bytes() {
        if cur.peek() != Some(expected) {
            return Err(cur.error(format!("invalid literal, expected `{keyword}`")));
        }
        cur.bump();
    }
    // "truex" is not "true" followed by trivia.
    if matches!(cur.peek(), Some(b) if b.is_ascii_alphanumeric()) {
        return Err(cur.error(format!("invalid literal, expected `{keyword}`")));
    }
    Ok(())
}

fn parse_object(cur: &mut Cursor) -> Result<Object> {
    cur.expect(b'{', "expected `{`")?;
    let mut obj = Object::with_key_match(cur.key_match);
    loop {
        skip_trivia(cur)?;
        match cur.peek() {
            Some(b'}') => {
                cur.bump();
                return Ok(obj);
            }
            // Stray and repeated commas are tolerated and skipped.
            Some(b',') => {
                cur.bump();
            }
            Some(b'"') => {
                let key = parse_string(cur)?;
                skip_trivia(cur)?;
                cur.expect(b':', "expected `:` after object key")?;
                skip_trivia(cur)?;
                let value = parse_value(cur)?;
                obj.add(key, value);
            }
            None => return Err(cur.error("unterminated object")),
            Some(_) => return Err(cur.error("expected object key")),
        }
    }
}

fn parse_array(cur: &mut Cursor) -> Result<Array> {
    cur.expect(b'[', "expected `[`")?;
    let mut arr = Array::new();
    loop {
        skip_trivia(cur)?;
        match cur.peek() {
            Some(b']') => {
                cur.bump();
                return Ok(arr);
            }
            Some(b',') => {
                cur.bump();
            }
            None => return Err(cur.error("unterminated array")),
            Some(_) => arr.push(parse_value(cur)?),
        }
    }
}

/// Parse a string literal. Plain runs are copied in segments; escapes decode
/// one character at a time. Raw control characters (< 0x20) are rejected,
/// raw bytes above 0x7E pass through untouched.
fn parse_string(cur: &mut Cursor) -> Result<String> {
    cur.expect(b'"', "expected string")?;
    let mut out = String::new();
    let mut seg_start = cur.offset;
    loop {
        match cur.peek() {
            None => return Err(cur.error("unterminated string")),
            Some(b'"') => {
                out.push_str(&cur.src[seg_start..cur.offset]);
                cur.bump();
                return Ok(out);
            }
            Some(b'\\') => {
                out.push_str(&cur.src[seg_start..cur.offset]);
                cur.bump();
                out.push(parse_escape(cur)?);
                seg_start = cur.offset;
            }
            Some(b) if b < 0x20 => {
                return Err(cur.error("control character in string literal"));
            }
            Some(_) => {
                cur.bump();
            }
        }
    }
}

/// Decode the character after a consumed backslash.
///
/// `\uXXXX` accepts any BMP scalar; a high surrogate must be immediately
/// followed by a low-surrogate escape and the pair decodes to one character.
/// An unpaired surrogate half is an error rather than mangled output.
fn parse_escape(cur: &mut Cursor) -> Result<char> {
    let escape = match cur.peek() {
        Some(b) => b,
        None => return Err(cur.error("unterminated string")),
    };
    cur.bump();
    match escape {
        b'"' => Ok('"'),
        b'\\' => Ok('\\'),
        b'/' => Ok('/'),
        b'b' => Ok('\u{0008}'),
        b'f' => Ok('\u{000C}'),
        b'n' => Ok('\n'),
        b'r' => Ok('\r'),
        b't' => Ok('\t'),
        b'u' => {
            let unit = parse_hex4(cur)?;
            match unit {
                0xD800..=0xDBFF => {
                    if cur.peek() != Some(b'\\') || cur.peek_at(1) != Some(b'u') {
                        return Err(cur.error("unpaired surrogate in `\\u` escape"));
                    }
                    cur.bump();
                    cur.bump();
                    let low = parse_hex4(cur)?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(cur.error("expected low surrogate after high surrogate"));
                    }
                    let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    char::from_u32(code).ok_or_else(|| cur.error("invalid `\\u` escape"))
                }
                0xDC00..=0xDFFF => Err(cur.error("unpaired surrogate in `\\u` escape")),
                _ => char::from_u32(unit).ok_or_else(|| cur.error("invalid `\\u` escape")),
            }
        }
        _ => Err(cur.error("invalid escape character")),
    }
}

/// Four hex digits of a `\uXXXX` escape, as a code unit.
fn parse_hex4(cur: &mut Cursor) -> Result<u32> {
    let mut code: u32 = 0;
    for _ in 0..4 {
        let digit = match cur.peek() {
            Some(b) if b.is_ascii_hexdigit() => (b as char).to_digit(16).unwrap_or(0),
            _ => return Err(cur.error("expected four hex digits after `\\u`")),
        };
        cur.bump();
        code = code * 16 + digit;
    }
    Ok(code)
}

fn parse_number(cur: &mut Cursor) -> Result<Value> {
    let start = cur.offset;
    let negative = match cur.peek() {
        Some(b'-') => {
            cur.bump();
            true
        }
        Some(b'+') => {
            cur.bump();
            false
        }
        _ => false,
    };

    if cur.peek() == Some(b'0') && matches!(cur.peek_at(1), Some(b'x' | b'X')) {
        cur.bump();
        cur.bump();
        let digits_start = cur.offset;
        while matches!(cur.peek(), Some(b) if b.is_ascii_hexdigit()) {
            cur.bump();
        }
        if cur.offset == digits_start {
            return Err(cur.error("expected hex digits after `0x`"));
        }
        if cur.peek() == Some(b'.') {
            return Err(cur.error("hex literals cannot have a fractional part"));
        }
        let magnitude = i64::from_str_radix(&cur.src[digits_start..cur.offset], 16)
            .map_err(|_| cur.error("hex literal out of range"))?;
        return Ok(Value::Integer(if negative { -magnitude } else { magnitude }));
    }

    let int_start = cur.offset;
    while matches!(cur.peek(), Some(b) if b.is_ascii_digit()) {
        cur.bump();
    }
    if cur.offset == int_start {
        return Err(cur.error("malformed number"));
    }

    let mut is_float = false;
    if cur.peek() == Some(b'.') {
        cur.bump();
        is_float = true;
        let frac_start = cur.offset;
        while matches!(cur.peek(), Some(b) if b.is_ascii_digit()) {
            cur.bump();
        }
        if cur.offset == frac_start {
            return Err(cur.error("expected digits after decimal point"));
        }
    }
    if matches!(cur.peek(), Some(b'e' | b'E')) {
        cur.bump();
        is_float = true;
        if matches!(cur.peek(), Some(b'+' | b'-')) {
            cur.bump();
        }
        let exp_start = cur.offset;
        while matches!(cur.peek(), Some(b) if b.is_ascii_digit()) {
            cur.bump();
        }
        if cur.offset == exp_start {
            return Err(cur.error("expected digits in exponent"));
        }
    }

    let text = &cur.src[start..cur.offset];
    if is_float {
        text.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| cur.error("malformed number"))
    } else {
        text.parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| cur.error("integer literal out of range"))
    }
}

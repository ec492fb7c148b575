//! Low-level reader and writer for the brace-delimited text encoding.
//!
//! ```text
//! value   := '{' field (',' field)* '}'
//! field   := name ':' scalar
//! name    := [A-Za-z0-9_]+
//! scalar  := integer | "true" | "false" | value
//! ```
//!
//! Whitespace is accepted between any two tokens. The reader knows nothing
//! about which fields a value has; callers drive it through
//! [`Reader::read_fields`] and decide what each name means.

use std::fmt;
use std::str::FromStr;

use crate::constants::{literals, marks};
use crate::errors::ParseError;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_token_char(c: char) -> bool {
    is_name_char(c) || c == '-'
}

// ============================================================================
// Reader
// ============================================================================

/// Cursor over encoded text.
///
/// A single reader may decode several consecutive values, which is how a
/// stream of cartons is read back.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn invalid_symbol(&self, found: char) -> ParseError {
        ParseError::InvalidSymbol {
            found,
            offset: self.pos,
        }
    }

    /// Next non-whitespace character, without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    /// Whether only whitespace remains.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Consumes exactly `mark`.
    pub fn read_mark(&mut self, mark: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == mark => {
                self.bump(c);
                Ok(())
            }
            Some(c) => Err(self.invalid_symbol(c)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Consumes a field separator or the closing mark.
    ///
    /// Returns `true` when another field follows.
    pub fn read_next_separator(&mut self) -> Result<bool, ParseError> {
        match self.peek() {
            Some(marks::SEPARATOR) => {
                self.bump(marks::SEPARATOR);
                Ok(true)
            }
            Some(marks::END) => {
                self.bump(marks::END);
                Ok(false)
            }
            Some(c) => Err(self.invalid_symbol(c)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Consumes `name ':'` and returns the name.
    pub fn read_value_name(&mut self) -> Result<&'a str, ParseError> {
        match self.peek() {
            None => return Err(ParseError::UnexpectedEnd),
            Some(c) if !is_name_char(c) => return Err(self.invalid_symbol(c)),
            Some(_) => {}
        }
        let name = self.take_while(is_name_char);
        self.read_mark(marks::VALUE)?;
        tracing::trace!(name, offset = self.pos, "read field name");
        Ok(name)
    }

    /// Scalar token: a run of alphanumerics, `_` and `-`.
    fn read_token(&mut self) -> Result<&'a str, ParseError> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some(c) if !is_token_char(c) => Err(self.invalid_symbol(c)),
            Some(_) => Ok(self.take_while(is_token_char)),
        }
    }

    /// Reads an optionally negative decimal integer for `field`.
    pub fn read_int<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let token = self.read_token()?;
        let digits = token.strip_prefix('-').unwrap_or(token);
        let invalid = || ParseError::InvalidValue {
            field,
            token: token.to_string(),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        token.parse().map_err(|_| invalid())
    }

    /// Reads a `true` / `false` literal for `field`.
    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, ParseError> {
        match self.read_token()? {
            literals::TRUE => Ok(true),
            literals::FALSE => Ok(false),
            other => Err(ParseError::InvalidValue {
                field,
                token: other.to_string(),
            }),
        }
    }

    /// Reads one complete `{ ... }` value, handing each field to `on_field`.
    ///
    /// `on_field` receives the field name with the cursor positioned at the
    /// scalar, and must consume exactly that scalar.
    pub fn read_fields<F>(&mut self, mut on_field: F) -> Result<(), ParseError>
    where
        F: FnMut(&'a str, &mut Reader<'a>) -> Result<(), ParseError>,
    {
        self.read_mark(marks::BEGIN)?;
        loop {
            let name = self.read_value_name()?;
            on_field(name, self)?;
            if !self.read_next_separator()? {
                return Ok(());
            }
        }
    }

    /// Fails unless only whitespace remains.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) => Err(self.invalid_symbol(c)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Writer
// ============================================================================

/// Emits one `{name: value, ...}` value into any [`fmt::Write`] sink.
///
/// Nested values are written by passing anything whose `Display` produces
/// an encoded value.
pub struct ValueWriter<'w, W: fmt::Write + ?Sized> {
    out: &'w mut W,
    has_fields: bool,
}

impl<'w, W: fmt::Write + ?Sized> ValueWriter<'w, W> {
    pub fn begin(out: &'w mut W) -> Result<Self, fmt::Error> {
        out.write_char(marks::BEGIN)?;
        Ok(Self {
            out,
            has_fields: false,
        })
    }

    pub fn field(&mut self, name: &str, value: impl fmt::Display) -> fmt::Result {
        if self.has_fields {
            write!(self.out, "{} ", marks::SEPARATOR)?;
        }
        self.has_fields = true;
        write!(self.out, "{}{} {}", name, marks::VALUE, value)
    }

    pub fn bool_field(&mut self, name: &str, value: bool) -> fmt::Result {
        self.field(name, if value { literals::TRUE } else { literals::FALSE })
    }

    pub fn finish(self) -> fmt::Result {
        self.out.write_char(marks::END)
    }
}

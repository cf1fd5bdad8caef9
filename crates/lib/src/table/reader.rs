//! Reader for table-literal text.
//!
//! The accepted syntax is the data subset of Lua table constructors. Nothing
//! is evaluated.
//!
//! ```text
//! chunk  = ["return"] table
//! table  = "{" [field {sep field} [sep]] "}"
//! field  = "[" key "]" "=" value | name "=" value | value
//! sep    = "," | ";"
//! value  = "nil" | "true" | "false" | number | string | table
//! ```
//!
//! A bracketed integer key is accepted only when it names the next
//! positional slot, so `{[1]="a", [2]="b"}` reads the same as `{"a", "b"}`.
//! A field whose value is `nil` is left out; a positional `nil` is an error
//! because it would leave a hole in the positional part.

use super::errors::TableError;
use super::{Table, TableValue};

/// Parses table-literal text into a [`Table`].
pub fn from_str(input: &str) -> Result<Table, TableError> {
    let mut parser = Parser::new(input);
    parser.skip_trivia()?;
    if parser.peek_word() == Some("return") {
        parser.pos += "return".len();
        parser.skip_trivia()?;
    }
    if parser.peek() != Some(b'{') {
        return Err(parser.error("expected a table constructor '{'"));
    }
    let table = parser.table()?;
    parser.skip_trivia()?;
    if !parser.is_end() {
        return Err(parser.error("unexpected text after the table"));
    }
    Ok(table)
}

/// Deepest table nesting the reader accepts.
pub const MAX_DEPTH: usize = 200;

/// Recursive-descent state over the input bytes.
struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    fn next(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn is_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn error(&self, message: impl Into<String>) -> TableError {
        TableError::Syntax {
            position: self.pos,
            message: message.into(),
        }
    }

    fn take(&mut self, expected: u8) -> Result<(), TableError> {
        match self.peek() {
            Some(byte) if byte == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(byte) => Err(self.error(format!(
                "expected '{}', found '{}'",
                expected as char,
                byte as char
            ))),
            None => Err(self.error(format!(
                "expected '{}', found end of input",
                expected as char
            ))),
        }
    }

    /// Skips whitespace and comments
    fn skip_trivia(&mut self) -> Result<(), TableError> {
        loop {
            match self.peek() {
                Some(byte) if byte.is_ascii_whitespace() => self.pos += 1,
                Some(b'-') if self.peek_at(1) == Some(b'-') => {
                    self.pos += 2;
                    if let Some(level) = self.long_bracket_level() {
                        self.long_bracket_body(level)?;
                    } else {
                        while let Some(byte) = self.next() {
                            if byte == b'\n' {
                                break;
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// The identifier at the current position, without consuming it
    fn peek_word(&self) -> Option<&'a str> {
        let rest = &self.input[self.pos..];
        let first = *rest.first()?;
        if !(first.is_ascii_alphabetic() || first == b'_') {
            return None;
        }
        let len = rest
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count();
        std::str::from_utf8(&rest[..len]).ok()
    }

    fn table(&mut self) -> Result<Table, TableError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("tables nested too deeply"));
        }
        self.depth += 1;
        let table = self.table_body();
        self.depth -= 1;
        table
    }

    fn table_body(&mut self) -> Result<Table, TableError> {
        self.take(b'{')?;
        let mut table = Table::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(b'}') {
                self.pos += 1;
                return Ok(table);
            }
            self.field(&mut table)?;
            self.skip_trivia()?;
            match self.peek() {
                Some(b',' | b';') => self.pos += 1,
                Some(b'}') => {}
                Some(_) => return Err(self.error("expected ',' or '}' after table entry")),
                None => return Err(self.error("unterminated table")),
            }
        }
    }

    fn field(&mut self, table: &mut Table) -> Result<(), TableError> {
        let start = self.pos;

        if self.peek() == Some(b'[') && !matches!(self.peek_at(1), Some(b'[' | b'=')) {
            self.pos += 1;
            self.skip_trivia()?;
            let key = self.value()?;
            self.skip_trivia()?;
            self.take(b']')?;
            self.skip_trivia()?;
            self.take(b'=')?;
            self.skip_trivia()?;
            let value = self.value()?;
            return match key {
                Some(TableValue::Text(key)) => {
                    if let Some(value) = value {
                        table.set(key, value);
                    }
                    Ok(())
                }
                Some(TableValue::Int(n)) if usize::try_from(n).ok() == Some(table.len() + 1) => {
                    let value = value.ok_or_else(|| self.error_at(start, "positional entry cannot be nil"))?;
                    table.push(value);
                    Ok(())
                }
                Some(TableValue::Int(n)) => Err(self.error_at(
                    start,
                    format!(
                        "integer key [{n}] must name the next positional slot {}",
                        table.len() + 1
                    ),
                )),
                Some(other) => Err(self.error_at(
                    start,
                    format!("{} keys are not supported", other.type_name()),
                )),
                None => Err(self.error_at(start, "table key cannot be nil")),
            };
        }

        if let Some(word) = self.peek_word()
            && !is_keyword(word)
        {
            let after = self.pos + word.len();
            let mut look = Parser {
                input: self.input,
                pos: after,
                depth: self.depth,
            };
            look.skip_trivia()?;
            if look.peek() == Some(b'=') && look.peek_at(1) != Some(b'=') {
                self.pos = look.pos + 1;
                self.skip_trivia()?;
                if let Some(value) = self.value()? {
                    table.set(word, value);
                }
                return Ok(());
            }
        }

        match self.value()? {
            Some(value) => {
                table.push(value);
                Ok(())
            }
            None => Err(self.error_at(start, "positional entry cannot be nil")),
        }
    }

    /// Parses a value; `Ok(None)` is `nil`
    fn value(&mut self) -> Result<Option<TableValue>, TableError> {
        match self.peek() {
            Some(b'{') => Ok(Some(TableValue::Table(self.table()?))),
            Some(quote @ (b'"' | b'\'')) => Ok(Some(TableValue::Text(self.quoted_string(quote)?))),
            Some(b'[') => match self.long_bracket_level() {
                Some(level) => Ok(Some(TableValue::Text(self.long_bracket_body(level)?))),
                None => Err(self.error("unexpected '['")),
            },
            Some(b'-') => {
                self.pos += 1;
                self.skip_trivia()?;
                match self.number()? {
                    TableValue::Int(n) => Ok(Some(TableValue::Int(n.wrapping_neg()))),
                    TableValue::Float(f) => Ok(Some(TableValue::Float(-f))),
                    _ => Err(self.error("expected a number after '-'")),
                }
            }
            Some(byte) if byte.is_ascii_digit() => Ok(Some(self.number()?)),
            Some(b'.') if self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) => {
                Ok(Some(self.number()?))
            }
            Some(_) => match self.peek_word() {
                Some("nil") => {
                    self.pos += 3;
                    Ok(None)
                }
                Some("true") => {
                    self.pos += 4;
                    Ok(Some(TableValue::Bool(true)))
                }
                Some("false") => {
                    self.pos += 5;
                    Ok(Some(TableValue::Bool(false)))
                }
                Some(word) => Err(self.error(format!("unexpected identifier '{word}'"))),
                None => Err(self.error(format!(
                    "unexpected character '{}'",
                    self.input[self.pos] as char
                ))),
            },
            None => Err(self.error("expected a value, found end of input")),
        }
    }

    fn number(&mut self) -> Result<TableValue, TableError> {
        let start = self.pos;

        if self.peek() == Some(b'0') && matches!(self.peek_at(1), Some(b'x' | b'X')) {
            self.pos += 2;
            let digits_start = self.pos;
            while self.peek().is_some_and(|b| b.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            let digits = self.slice(digits_start, self.pos);
            return u64::from_str_radix(digits, 16)
                .map(|n| TableValue::Int(n as i64))
                .map_err(|_| self.error_at(start, "malformed hexadecimal number"));
        }

        let mut is_float = false;
        while let Some(byte) = self.peek() {
            match byte {
                b'0'..=b'9' => self.pos += 1,
                b'.' => {
                    is_float = true;
                    self.pos += 1;
                }
                b'e' | b'E' => {
                    is_float = true;
                    self.pos += 1;
                    if matches!(self.peek(), Some(b'+' | b'-')) {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
        if self.peek().is_some_and(|b| b.is_ascii_alphabetic() || b == b'_') {
            return Err(self.error("malformed number"));
        }

        let text = self.slice(start, self.pos);
        if !is_float && let Ok(n) = text.parse::<i64>() {
            return Ok(TableValue::Int(n));
        }
        // Integers too large for 64 bits read as floats.
        text.parse::<f64>()
            .map(TableValue::Float)
            .map_err(|_| self.error_at(start, format!("malformed number '{text}'")))
    }

    fn quoted_string(&mut self, quote: u8) -> Result<String, TableError> {
        let start = self.pos;
        self.pos += 1;
        let mut bytes = Vec::new();
        loop {
            let Some(byte) = self.next() else {
                return Err(self.error_at(start, "unterminated string"));
            };
            match byte {
                b if b == quote => break,
                b'\n' => return Err(self.error_at(start, "unterminated string")),
                b'\\' => self.escape(&mut bytes)?,
                b => bytes.push(b),
            }
        }
        String::from_utf8(bytes).map_err(|_| self.error_at(start, "string is not valid UTF-8"))
    }

    fn escape(&mut self, out: &mut Vec<u8>) -> Result<(), TableError> {
        let Some(byte) = self.next() else {
            return Err(self.error("unfinished escape sequence"));
        };
        match byte {
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0c),
            b'v' => out.push(0x0b),
            b'\\' => out.push(b'\\'),
            b'"' => out.push(b'"'),
            b'\'' => out.push(b'\''),
            b'\n' => out.push(b'\n'),
            b'\r' => {
                if self.peek() == Some(b'\n') {
                    self.pos += 1;
                }
                out.push(b'\n');
            }
            b'z' => {
                while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
                    self.pos += 1;
                }
            }
            b'x' => {
                let digits = self.input.get(self.pos..self.pos + 2).unwrap_or_default();
                let value = std::str::from_utf8(digits)
                    .ok()
                    .and_then(|d| u8::from_str_radix(d, 16).ok())
                    .ok_or_else(|| self.error("\\x must be followed by two hexadecimal digits"))?;
                self.pos += 2;
                out.push(value);
            }
            b'u' => {
                self.take(b'{')?;
                let start = self.pos;
                while self.peek().is_some_and(|b| b.is_ascii_hexdigit()) {
                    self.pos += 1;
                }
                let ch = u32::from_str_radix(self.slice(start, self.pos), 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| self.error("invalid \\u{...} escape"))?;
                self.take(b'}')?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            b'0'..=b'9' => {
                let mut value = u32::from(byte - b'0');
                for _ in 0..2 {
                    match self.peek() {
                        Some(d @ b'0'..=b'9') => {
                            value = value * 10 + u32::from(d - b'0');
                            self.pos += 1;
                        }
                        _ => break,
                    }
                }
                let value = u8::try_from(value)
                    .map_err(|_| self.error("decimal escape is larger than 255"))?;
                out.push(value);
            }
            other => {
                return Err(self.error(format!("invalid escape sequence '\\{}'", other as char)));
            }
        }
        Ok(())
    }

    /// If a long bracket (`[[` or `[==[`) opens here, its level
    fn long_bracket_level(&self) -> Option<usize> {
        if self.peek() != Some(b'[') {
            return None;
        }
        let level = self.input[self.pos + 1..]
            .iter()
            .take_while(|b| **b == b'=')
            .count();
        (self.peek_at(level + 1) == Some(b'[')).then_some(level)
    }

    /// Consumes a long bracket of `level` and returns its body
    fn long_bracket_body(&mut self, level: usize) -> Result<String, TableError> {
        let start = self.pos;
        self.pos += level + 2;
        // A newline right after the opening bracket is not part of the body.
        if self.peek() == Some(b'\r') {
            self.pos += 1;
        }
        if self.peek() == Some(b'\n') {
            self.pos += 1;
        }
        let body_start = self.pos;
        while !self.is_end() {
            if self.peek() == Some(b']')
                && self.input[self.pos + 1..]
                    .iter()
                    .take_while(|b| **b == b'=')
                    .count()
                    == level
                && self.peek_at(level + 1) == Some(b']')
            {
                let body = self.slice(body_start, self.pos).to_string();
                self.pos += level + 2;
                return Ok(body);
            }
            self.pos += 1;
        }
        Err(self.error_at(start, "unterminated long bracket"))
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        // Slices are only taken on ASCII boundaries of valid UTF-8 input.
        std::str::from_utf8(&self.input[start..end]).unwrap_or_default()
    }

    fn error_at(&self, position: usize, message: impl Into<String>) -> TableError {
        TableError::Syntax {
            position,
            message: message.into(),
        }
    }
}

fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "and"
            | "break"
            | "do"
            | "else"
            | "elseif"
            | "end"
            | "false"
            | "for"
            | "function"
            | "goto"
            | "if"
            | "in"
            | "local"
            | "nil"
            | "not"
            | "or"
            | "repeat"
            | "return"
            | "then"
            | "true"
            | "until"
            | "while"
    )
}

pub(super) fn is_identifier(word: &str) -> bool {
    let mut bytes = word.bytes();
    bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        && !is_keyword(word)
}

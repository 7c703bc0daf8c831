//! Restricted object-literal parser.
//!
//! Content sources describe a post with an object literal written in
//! source-code syntax rather than JSON: unquoted keys, single quotes,
//! trailing commas and comments all occur in practice. This parser accepts
//! that data subset and nothing else. It never evaluates code.
//!
//! The one exception to "data only" is the `cover` key, which in content
//! sources points at an imported image binding. Its value is skipped as an
//! opaque expression and read back as `null`.

use serde_json::{Map, Number, Value};

use crate::error::MetadataError;

/// Key whose value is neutralized to `null` instead of parsed.
pub const NEUTRALIZED_KEY: &str = "cover";

/// Deepest object/array nesting accepted before parsing gives up.
pub const MAX_DEPTH: usize = 128;

/// Parse a restricted object literal into a JSON value.
///
/// # Errors
///
/// Returns [`MetadataError::Syntax`] for malformed input and
/// [`MetadataError::UnresolvedReference`] for a bare identifier used as a
/// value anywhere other than under [`NEUTRALIZED_KEY`].
pub fn parse_literal(text: &str) -> Result<Value, MetadataError> {
    let mut parser = Parser::new(text);
    parser.skip_trivia()?;
    let value = parser.parse_value()?;
    parser.skip_trivia()?;
    if parser.peek().is_some() {
        return Err(parser.syntax("unexpected trailing characters"));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn position(&self, at: usize) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for &c in &self.chars[..at.min(self.chars.len())] {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    fn syntax(&self, message: &str) -> MetadataError {
        let (line, column) = self.position(self.pos);
        MetadataError::Syntax {
            line,
            column,
            message: message.to_string(),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), MetadataError> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.syntax(&format!("expected '{expected}'")))
        }
    }

    /// Skip whitespace, `//` line comments and `/* */` block comments.
    fn skip_trivia(&mut self) -> Result<(), MetadataError> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(c), _) if c.is_whitespace() => self.pos += 1,
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    self.pos += 2;
                    loop {
                        match (self.peek(), self.peek_at(1)) {
                            (Some('*'), Some('/')) => {
                                self.pos += 2;
                                break;
                            }
                            (Some(_), _) => self.pos += 1,
                            (None, _) => return Err(self.syntax("unterminated comment")),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value, MetadataError> {
        match self.peek() {
            Some('{') => self.nested(Self::parse_object),
            Some('[') => self.nested(Self::parse_array),
            Some(q @ ('"' | '\'' | '`')) => self.parse_string(q).map(Value::String),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.parse_number(),
            Some(c) if is_ident_start(c) => self.parse_keyword(),
            Some(_) => Err(self.syntax("expected a value")),
            None => Err(self.syntax("unexpected end of literal")),
        }
    }

    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<Value, MetadataError>,
    ) -> Result<Value, MetadataError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.syntax("nesting too deep"));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn parse_object(&mut self) -> Result<Value, MetadataError> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(Value::Object(map));
            }

            let key = self.parse_key()?;
            self.skip_trivia()?;
            self.expect(':')?;
            self.skip_trivia()?;

            let value = if key == NEUTRALIZED_KEY {
                self.skip_expression()?;
                Value::Null
            } else {
                self.parse_value()?
            };
            map.insert(key, value);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {}
                _ => return Err(self.syntax("expected ',' or '}'")),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value, MetadataError> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.pos += 1;
                return Ok(Value::Array(items));
            }

            items.push(self.parse_value()?);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(']') => {}
                _ => return Err(self.syntax("expected ',' or ']'")),
            }
        }
    }

    fn parse_key(&mut self) -> Result<String, MetadataError> {
        match self.peek() {
            Some(q @ ('"' | '\'')) => self.parse_string(q),
            Some(c) if is_ident_start(c) => Ok(self.take_identifier()),
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
                Ok(self.chars[start..self.pos].iter().collect())
            }
            _ => Err(self.syntax("expected a property name")),
        }
    }

    fn take_identifier(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn parse_keyword(&mut self) -> Result<Value, MetadataError> {
        let start = self.pos;
        let word = self.take_identifier();
        match word.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" | "undefined" => Ok(Value::Null),
            _ => {
                let (line, column) = self.position(start);
                Err(MetadataError::UnresolvedReference {
                    name: word,
                    line,
                    column,
                })
            }
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, MetadataError> {
        self.expect(quote)?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.syntax("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\n') if quote != '`' => {
                    return Err(self.syntax("line break inside string"));
                }
                Some('$') if quote == '`' && self.peek() == Some('{') => {
                    self.pos -= 1;
                    return Err(self.syntax("template interpolation is not allowed"));
                }
                Some('\\') => self.parse_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), MetadataError> {
        let Some(c) = self.bump() else {
            return Err(self.syntax("unterminated escape"));
        };
        match c {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            // line continuation
            '\n' => {}
            'u' => {
                let code = self.parse_unicode_escape()?;
                out.push(code);
            }
            other => out.push(other),
        }
        Ok(())
    }

    fn parse_unicode_escape(&mut self) -> Result<char, MetadataError> {
        let high = self.read_hex4()?;
        if (0xD800..0xDC00).contains(&high) {
            if self.peek() == Some('\\') && self.peek_at(1) == Some('u') {
                self.pos += 2;
                let low = self.read_hex4()?;
                if !(0xDC00..0xE000).contains(&low) {
                    return Err(self.syntax("invalid surrogate pair"));
                }
                let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(code).ok_or_else(|| self.syntax("invalid surrogate pair"));
            }
            return Err(self.syntax("unpaired surrogate escape"));
        }
        char::from_u32(high).ok_or_else(|| self.syntax("invalid unicode escape"))
    }

    fn read_hex4(&mut self) -> Result<u32, MetadataError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.syntax("expected four hex digits"))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn parse_number(&mut self) -> Result<Value, MetadataError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.pos += 1;
        }
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '_'))
            || (matches!(self.peek(), Some('-' | '+'))
                && matches!(
                    self.pos.checked_sub(1).and_then(|i| self.chars.get(i)),
                    Some('e' | 'E')
                ))
        {
            self.pos += 1;
        }

        let text: String = self.chars[start..self.pos]
            .iter()
            .filter(|&&c| c != '_')
            .collect();
        let text = text.strip_prefix('+').unwrap_or(&text);

        if let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Number(int.into()));
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| self.syntax("invalid number"))
    }

    /// Skip an arbitrary expression up to the next top-level `,` or `}`.
    fn skip_expression(&mut self) -> Result<(), MetadataError> {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => return Err(self.syntax("unexpected end of literal")),
                Some(',' | '}') if depth == 0 => break,
                Some('(' | '[' | '{') => {
                    depth += 1;
                    self.pos += 1;
                }
                Some(')' | ']' | '}') => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| self.syntax("unbalanced expression"))?;
                    self.pos += 1;
                }
                Some(q @ ('"' | '\'' | '`')) => {
                    self.parse_string(q)?;
                }
                Some(_) => self.pos += 1,
            }
        }
        if self.pos == start {
            return Err(self.syntax("expected a value"));
        }
        Ok(())
    }
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

const fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

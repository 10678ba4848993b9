// Copyright 2019 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Splitting parameterized strings into tokens
//!
//! A template is scanned once, left to right. Runs of ordinary characters
//! become [`TokenKind::Literal`] tokens and every `%` directive becomes one
//! operator token, so the tokens of a template cover it without gaps.

use std::{iter::Peekable, str::CharIndices};

use crate::evaluate::Value;

/// One token of a parameterized string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterToken {
    /// Template text covered by the token
    pub representation: String,
    /// Byte offset of the token in the template
    pub offset: usize,
    pub kind: TokenKind,
}

impl ParameterToken {
    /// Byte offset just past the token
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.representation.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalOp {
    Eq,
    Gt,
    Lt,
    And,
    Or,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// `%!`
    Not,
    /// `%~`
    BitComplement,
}

/// Conversion character of a printf-style directive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Conversion {
    #[default]
    Decimal,
    Octal,
    Hex,
    HexUpper,
    String,
}

impl Conversion {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Decimal),
            'o' => Some(Self::Octal),
            'x' => Some(Self::Hex),
            'X' => Some(Self::HexUpper),
            's' => Some(Self::String),
            _ => None,
        }
    }
}

/// Flags, width and precision of a printf-style directive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatSpec {
    pub width: u16,
    pub precision: Option<u16>,
    pub alternate: bool,
    pub left: bool,
    pub sign: bool,
    pub space: bool,
    pub zero: bool,
    pub conversion: Conversion,
}

/// What a token does when evaluated
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Text copied to the output
    Literal,
    /// `%%`
    EscapedPercent,
    /// `%{n}`, `%'c'` and `%[...]`
    PushConstant(Value),
    /// `%p1` to `%p9`
    PushParamRef(u8),
    /// `%c`
    PopAsChar,
    /// `%s`
    PopAsString,
    /// `%d`, `%x`, `%:-5.2s` and friends
    Formatting(FormatSpec),
    ArithmeticOp(ArithmeticOp),
    BitwiseOp(BitwiseOp),
    LogicalOp(LogicalOp),
    UnaryOp(UnaryOp),
    /// `%?`
    ConditionalStart,
    /// `%t`
    ConditionalThen,
    /// `%e`
    ConditionalElse,
    /// `%;`
    ConditionalEnd,
    /// `%Px`
    SetVariable(char),
    /// `%gx`
    GetVariable(char),
    /// `%l`
    StringLength,
    /// `%i`
    IncrementParams,
}

/// Errors reported when tokenizing a template
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    #[error("Percent sign at the end of the template")]
    DanglingPercent,
    #[error("Template ends inside a directive")]
    UnexpectedEnd,
    #[error("Invalid parameter index: {0}")]
    InvalidParameterIndex(char),
    #[error("Invalid variable name: {0}")]
    InvalidVariableName(char),
    #[error("Integer constant malformed")]
    MalformedIntegerConstant,
    #[error("Integer constant too large")]
    IntegerConstantOverflow,
    #[error("Malformed character constant")]
    MalformedCharacterConstant,
    #[error("Unterminated character collection")]
    UnterminatedCollection,
    #[error("Format directive without conversion character")]
    MissingConversion,
    #[error("Unrecognized format option: {0}")]
    UnrecognizedFormatOption(char),
    #[error("Overflow in format width")]
    FormatWidthOverflow,
    #[error("Overflow in format precision")]
    FormatPrecisionOverflow,
    #[error("Unknown operator: {0}")]
    UnknownOperator(char),
}

/// Malformed template, with the byte offset of the problem
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct SyntaxError {
    pub offset: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    const fn new(offset: usize, kind: SyntaxErrorKind) -> Self {
        Self { offset, kind }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum FormatState {
    Flags,
    Width,
    Precision,
}

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Split a parameterized string into tokens
///
/// Returns the tokens in template order. A template without `%` produces a
/// single literal token, an empty template produces no tokens.
pub fn tokenize(template: &str) -> Result<Vec<ParameterToken>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = template.char_indices().peekable();
    let mut literal_start = None;

    while let Some((start, c)) = chars.next() {
        if c != '%' {
            literal_start.get_or_insert(start);
            continue;
        }
        if let Some(literal_start) = literal_start.take() {
            tokens.push(make_token(template, literal_start, start, TokenKind::Literal));
        }
        let kind = scan_directive(start, &mut chars)?;
        let end = position(template, &mut chars);
        tokens.push(make_token(template, start, end, kind));
    }

    if let Some(literal_start) = literal_start {
        tokens.push(make_token(
            template,
            literal_start,
            template.len(),
            TokenKind::Literal,
        ));
    }

    Ok(tokens)
}

fn make_token(template: &str, start: usize, end: usize, kind: TokenKind) -> ParameterToken {
    ParameterToken {
        representation: template[start..end].to_string(),
        offset: start,
        kind,
    }
}

/// Byte offset of the next unread character
fn position(template: &str, chars: &mut Chars<'_>) -> usize {
    chars.peek().map_or(template.len(), |&(offset, _)| offset)
}

/// Scan the directive following the `%` at `start`
fn scan_directive(start: usize, chars: &mut Chars<'_>) -> Result<TokenKind, SyntaxError> {
    let Some((at, op)) = chars.next() else {
        return Err(SyntaxError::new(start, SyntaxErrorKind::DanglingPercent));
    };

    let kind = match op {
        '%' => TokenKind::EscapedPercent,
        'c' => TokenKind::PopAsChar,
        's' => TokenKind::PopAsString,
        'l' => TokenKind::StringLength,
        'i' => TokenKind::IncrementParams,
        '+' => TokenKind::ArithmeticOp(ArithmeticOp::Add),
        '-' => TokenKind::ArithmeticOp(ArithmeticOp::Sub),
        '*' => TokenKind::ArithmeticOp(ArithmeticOp::Mul),
        '/' => TokenKind::ArithmeticOp(ArithmeticOp::Div),
        'm' => TokenKind::ArithmeticOp(ArithmeticOp::Mod),
        '&' => TokenKind::BitwiseOp(BitwiseOp::And),
        '|' => TokenKind::BitwiseOp(BitwiseOp::Or),
        '^' => TokenKind::BitwiseOp(BitwiseOp::Xor),
        '=' => TokenKind::LogicalOp(LogicalOp::Eq),
        '>' => TokenKind::LogicalOp(LogicalOp::Gt),
        '<' => TokenKind::LogicalOp(LogicalOp::Lt),
        'A' => TokenKind::LogicalOp(LogicalOp::And),
        'O' => TokenKind::LogicalOp(LogicalOp::Or),
        '!' => TokenKind::UnaryOp(UnaryOp::Not),
        '~' => TokenKind::UnaryOp(UnaryOp::BitComplement),
        '?' => TokenKind::ConditionalStart,
        't' => TokenKind::ConditionalThen,
        'e' => TokenKind::ConditionalElse,
        ';' => TokenKind::ConditionalEnd,
        'p' => match chars.next() {
            // params are 1-indexed
            Some((_, index @ '1'..='9')) => TokenKind::PushParamRef(index as u8 - b'0'),
            Some((at, index)) => {
                return Err(SyntaxError::new(
                    at,
                    SyntaxErrorKind::InvalidParameterIndex(index),
                ));
            }
            None => return Err(SyntaxError::new(start, SyntaxErrorKind::UnexpectedEnd)),
        },
        'P' | 'g' => match chars.next() {
            Some((_, name)) if name.is_ascii_alphabetic() => {
                if op == 'P' {
                    TokenKind::SetVariable(name)
                } else {
                    TokenKind::GetVariable(name)
                }
            }
            Some((at, name)) => {
                return Err(SyntaxError::new(
                    at,
                    SyntaxErrorKind::InvalidVariableName(name),
                ));
            }
            None => return Err(SyntaxError::new(start, SyntaxErrorKind::UnexpectedEnd)),
        },
        '{' => scan_integer_constant(start, chars)?,
        '\'' => match (chars.next(), chars.next()) {
            (Some((_, c)), Some((_, '\''))) => TokenKind::PushConstant(Value::Char(c)),
            (Some(_), Some((at, _))) => {
                return Err(SyntaxError::new(
                    at,
                    SyntaxErrorKind::MalformedCharacterConstant,
                ));
            }
            _ => return Err(SyntaxError::new(start, SyntaxErrorKind::UnexpectedEnd)),
        },
        '[' => {
            let mut collection = String::new();
            loop {
                match chars.next() {
                    Some((_, ']')) => break,
                    Some((_, c)) => collection.push(c),
                    None => {
                        return Err(SyntaxError::new(
                            start,
                            SyntaxErrorKind::UnterminatedCollection,
                        ));
                    }
                }
            }
            TokenKind::PushConstant(Value::Str(collection))
        }
        'd' | 'o' | 'x' | 'X' => TokenKind::Formatting(FormatSpec {
            conversion: Conversion::from_char(op).unwrap_or_default(),
            ..FormatSpec::default()
        }),
        ':' | '#' | ' ' | '.' | '0'..='9' => scan_format(start, op, chars)?,
        op => return Err(SyntaxError::new(at, SyntaxErrorKind::UnknownOperator(op))),
    };

    Ok(kind)
}

fn scan_integer_constant(start: usize, chars: &mut Chars<'_>) -> Result<TokenKind, SyntaxError> {
    let mut value: Option<i32> = None;
    loop {
        let Some((at, c)) = chars.next() else {
            return Err(SyntaxError::new(start, SyntaxErrorKind::UnexpectedEnd));
        };
        if c == '}' {
            return match value {
                Some(value) => Ok(TokenKind::PushConstant(Value::Number(value))),
                None => Err(SyntaxError::new(
                    at,
                    SyntaxErrorKind::MalformedIntegerConstant,
                )),
            };
        }
        let Some(digit) = c.to_digit(10) else {
            return Err(SyntaxError::new(
                at,
                SyntaxErrorKind::MalformedIntegerConstant,
            ));
        };
        match value
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|tens| tens.checked_add(digit as i32))
        {
            Some(next) => value = Some(next),
            None => {
                return Err(SyntaxError::new(
                    at,
                    SyntaxErrorKind::IntegerConstantOverflow,
                ));
            }
        }
    }
}

/// Scan a printf-style directive whose first character after `%` is `first`
fn scan_format(
    start: usize,
    first: char,
    chars: &mut Chars<'_>,
) -> Result<TokenKind, SyntaxError> {
    let mut spec = FormatSpec::default();
    let mut state = FormatState::Flags;
    match first {
        ':' => (),
        '#' => spec.alternate = true,
        ' ' => spec.space = true,
        '0' => spec.zero = true,
        '.' => {
            spec.precision = Some(0);
            state = FormatState::Precision;
        }
        digit => {
            spec.width = digit as u16 - '0' as u16;
            state = FormatState::Width;
        }
    }

    loop {
        let Some((at, c)) = chars.next() else {
            return Err(SyntaxError::new(start, SyntaxErrorKind::MissingConversion));
        };

        if let Some(conversion) = Conversion::from_char(c) {
            spec.conversion = conversion;
            return Ok(TokenKind::Formatting(spec));
        }

        match (state, c) {
            (FormatState::Flags, '#') => spec.alternate = true,
            (FormatState::Flags, '-') => spec.left = true,
            (FormatState::Flags, '+') => spec.sign = true,
            (FormatState::Flags, ' ') => spec.space = true,
            (FormatState::Flags, '0') => spec.zero = true,
            (FormatState::Flags, '1'..='9') => {
                spec.width = c as u16 - '0' as u16;
                state = FormatState::Width;
            }
            (FormatState::Width, '0'..='9') => {
                spec.width = spec
                    .width
                    .checked_mul(10)
                    .and_then(|w| w.checked_add(c as u16 - '0' as u16))
                    .ok_or_else(|| SyntaxError::new(at, SyntaxErrorKind::FormatWidthOverflow))?;
            }
            (FormatState::Flags | FormatState::Width, '.') => {
                spec.precision = Some(0);
                state = FormatState::Precision;
            }
            (FormatState::Precision, '0'..='9') => {
                spec.precision = spec
                    .precision
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|p| p.checked_add(c as u16 - '0' as u16))
                    .map(Some)
                    .ok_or_else(|| {
                        SyntaxError::new(at, SyntaxErrorKind::FormatPrecisionOverflow)
                    })?;
            }
            _ => {
                return Err(SyntaxError::new(
                    at,
                    SyntaxErrorKind::UnrecognizedFormatOption(c),
                ));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(template: &str) -> Vec<TokenKind> {
        tokenize(template)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn error(template: &str) -> SyntaxError {
        tokenize(template).unwrap_err()
    }

    #[test]
    fn empty_template() {
        assert_eq!(tokenize(""), Ok(vec![]));
    }

    #[test]
    fn literal_only() {
        let tokens = tokenize("\x1b[H\x1b[2J").unwrap();
        assert_eq!(
            tokens,
            vec![ParameterToken {
                representation: "\x1b[H\x1b[2J".to_string(),
                offset: 0,
                kind: TokenKind::Literal,
            }]
        );
    }

    #[test]
    fn cursor_address() {
        let tokens = tokenize("\x1b[%i%p1%d;%p2%dH").unwrap();
        let summary: Vec<(&str, usize)> = tokens
            .iter()
            .map(|token| (token.representation.as_str(), token.offset))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("\x1b[", 0),
                ("%i", 2),
                ("%p1", 4),
                ("%d", 7),
                (";", 9),
                ("%p2", 10),
                ("%d", 13),
                ("H", 15),
            ]
        );
        assert_eq!(tokens[1].kind, TokenKind::IncrementParams);
        assert_eq!(tokens[2].kind, TokenKind::PushParamRef(1));
        assert_eq!(
            tokens[3].kind,
            TokenKind::Formatting(FormatSpec::default())
        );
    }

    #[test]
    fn tokens_cover_template() {
        let template = "\x1b[%?%p1%{8}%<%t3%p1%d%e%p1%{16}%<%t9%p1%{8}%-%d%e38;5;%p1%d%;m";
        let tokens = tokenize(template).unwrap();
        let mut expected_offset = 0;
        for token in &tokens {
            assert_eq!(token.offset, expected_offset);
            expected_offset = token.end();
        }
        assert_eq!(expected_offset, template.len());
        let joined: String = tokens.iter().map(|t| t.representation.as_str()).collect();
        assert_eq!(joined, template);
    }

    #[test]
    fn single_character_operators() {
        assert_eq!(
            kinds("%%%c%s%l%+%-%*%/%m%&%|%^%=%<%>%A%O%!%~%i"),
            vec![
                TokenKind::EscapedPercent,
                TokenKind::PopAsChar,
                TokenKind::PopAsString,
                TokenKind::StringLength,
                TokenKind::ArithmeticOp(ArithmeticOp::Add),
                TokenKind::ArithmeticOp(ArithmeticOp::Sub),
                TokenKind::ArithmeticOp(ArithmeticOp::Mul),
                TokenKind::ArithmeticOp(ArithmeticOp::Div),
                TokenKind::ArithmeticOp(ArithmeticOp::Mod),
                TokenKind::BitwiseOp(BitwiseOp::And),
                TokenKind::BitwiseOp(BitwiseOp::Or),
                TokenKind::BitwiseOp(BitwiseOp::Xor),
                TokenKind::LogicalOp(LogicalOp::Eq),
                TokenKind::LogicalOp(LogicalOp::Lt),
                TokenKind::LogicalOp(LogicalOp::Gt),
                TokenKind::LogicalOp(LogicalOp::And),
                TokenKind::LogicalOp(LogicalOp::Or),
                TokenKind::UnaryOp(UnaryOp::Not),
                TokenKind::UnaryOp(UnaryOp::BitComplement),
                TokenKind::IncrementParams,
            ]
        );
    }

    #[test]
    fn constants_and_variables() {
        assert_eq!(
            kinds("%{456}%'A'%[;0123456789]%PA%gz"),
            vec![
                TokenKind::PushConstant(Value::Number(456)),
                TokenKind::PushConstant(Value::Char('A')),
                TokenKind::PushConstant(Value::Str(";0123456789".to_string())),
                TokenKind::SetVariable('A'),
                TokenKind::GetVariable('z'),
            ]
        );
    }

    #[test]
    fn conditionals() {
        assert_eq!(
            kinds("%?%p1%tA%eB%;"),
            vec![
                TokenKind::ConditionalStart,
                TokenKind::PushParamRef(1),
                TokenKind::ConditionalThen,
                TokenKind::Literal,
                TokenKind::ConditionalElse,
                TokenKind::Literal,
                TokenKind::ConditionalEnd,
            ]
        );
    }

    #[test]
    fn stray_conditional_end_tolerated() {
        assert_eq!(
            kinds("%;x"),
            vec![TokenKind::ConditionalEnd, TokenKind::Literal]
        );
        assert_eq!(
            kinds("%?%?%;"),
            vec![
                TokenKind::ConditionalStart,
                TokenKind::ConditionalStart,
                TokenKind::ConditionalEnd,
            ]
        );
    }

    #[test]
    fn format_directives() {
        let tests = [
            ("%x", FormatSpec {
                conversion: Conversion::Hex,
                ..FormatSpec::default()
            }),
            ("%02x", FormatSpec {
                width: 2,
                zero: true,
                conversion: Conversion::Hex,
                ..FormatSpec::default()
            }),
            ("%2.2X", FormatSpec {
                width: 2,
                precision: Some(2),
                conversion: Conversion::HexUpper,
                ..FormatSpec::default()
            }),
            ("%:-5.4s", FormatSpec {
                width: 5,
                precision: Some(4),
                left: true,
                conversion: Conversion::String,
                ..FormatSpec::default()
            }),
            ("%:-+ #10.5x", FormatSpec {
                width: 10,
                precision: Some(5),
                alternate: true,
                left: true,
                sign: true,
                space: true,
                conversion: Conversion::Hex,
                ..FormatSpec::default()
            }),
            ("%.d", FormatSpec {
                precision: Some(0),
                ..FormatSpec::default()
            }),
        ];
        for (template, spec) in tests {
            assert_eq!(
                kinds(template),
                vec![TokenKind::Formatting(spec)],
                "Failed for {template}"
            );
        }
    }

    #[test]
    fn multibyte_literals_keep_byte_offsets() {
        let tokens = tokenize("é%d").unwrap();
        assert_eq!(tokens[1].offset, 2);
        assert_eq!(tokens[1].representation, "%d");
    }

    #[test]
    fn dangling_percent() {
        assert_eq!(
            error("abc%"),
            SyntaxError::new(3, SyntaxErrorKind::DanglingPercent)
        );
    }

    #[test]
    fn bad_parameter_index() {
        assert_eq!(
            error("%p0"),
            SyntaxError::new(2, SyntaxErrorKind::InvalidParameterIndex('0'))
        );
        assert_eq!(
            error("xy%p"),
            SyntaxError::new(2, SyntaxErrorKind::UnexpectedEnd)
        );
    }

    #[test]
    fn bad_variable_name() {
        assert_eq!(
            error("%P7"),
            SyntaxError::new(2, SyntaxErrorKind::InvalidVariableName('7'))
        );
        assert_eq!(
            error("%g%"),
            SyntaxError::new(2, SyntaxErrorKind::InvalidVariableName('%'))
        );
    }

    #[test]
    fn bad_integer_constant() {
        assert_eq!(
            error("%{2b}"),
            SyntaxError::new(3, SyntaxErrorKind::MalformedIntegerConstant)
        );
        assert_eq!(
            error("%{}"),
            SyntaxError::new(2, SyntaxErrorKind::MalformedIntegerConstant)
        );
        assert_eq!(
            error("%{12"),
            SyntaxError::new(0, SyntaxErrorKind::UnexpectedEnd)
        );
        assert_eq!(
            error("%{2147483648}"),
            SyntaxError::new(11, SyntaxErrorKind::IntegerConstantOverflow)
        );
    }

    #[test]
    fn bad_char_constant() {
        assert_eq!(
            error("%'ab'"),
            SyntaxError::new(3, SyntaxErrorKind::MalformedCharacterConstant)
        );
        assert_eq!(
            error("%'a"),
            SyntaxError::new(0, SyntaxErrorKind::UnexpectedEnd)
        );
    }

    #[test]
    fn unterminated_collection() {
        assert_eq!(
            error("%[abc"),
            SyntaxError::new(0, SyntaxErrorKind::UnterminatedCollection)
        );
    }

    #[test]
    fn format_errors() {
        assert_eq!(
            error("ab%5"),
            SyntaxError::new(2, SyntaxErrorKind::MissingConversion)
        );
        assert_eq!(
            error("%:^x"),
            SyntaxError::new(2, SyntaxErrorKind::UnrecognizedFormatOption('^'))
        );
        assert_eq!(
            error("%65536d"),
            SyntaxError::new(5, SyntaxErrorKind::FormatWidthOverflow)
        );
        assert_eq!(
            error("%.65536d"),
            SyntaxError::new(6, SyntaxErrorKind::FormatPrecisionOverflow)
        );
    }

    #[test]
    fn unknown_operator() {
        assert_eq!(
            error("%Y"),
            SyntaxError::new(1, SyntaxErrorKind::UnknownOperator('Y'))
        );
    }
}

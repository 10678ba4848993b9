// Copyright 2019 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parameterized string evaluation

use std::{array::from_fn, fmt};

use crate::tokenize::{
    ArithmeticOp, BitwiseOp, Conversion, FormatSpec, LogicalOp, ParameterToken, SyntaxError,
    TokenKind, UnaryOp, tokenize,
};

/// Values that can be passed to a parameterized string or pushed by it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Number(i32),
    Char(char),
    Str(String),
}

impl Value {
    /// Numeric view of the value, `None` for strings that are not decimal integers
    #[must_use]
    pub fn to_number(&self) -> Option<i32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Char(c) => Some(*c as i32),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Number(i32::from(value))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Errors reported when evaluating a parameterized string
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EvaluationError {
    #[error("Not enough stack elements for {operator} at offset {offset}")]
    StackUnderflow { offset: usize, operator: String },
    #[error("Operand {value:?} at offset {offset} is not a number")]
    NotNumeric { offset: usize, value: String },
    #[error("Parameter type not expected by {operator} at offset {offset}")]
    TypeMismatch { offset: usize, operator: String },
    #[error("Value {value} at offset {offset} is not a character")]
    InvalidCharacter { offset: usize, value: i32 },
    #[error("Token at offset {offset} does not match the template")]
    TokenMismatch { offset: usize },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Tokenize and evaluate a parameterized string in one step
pub fn expand(template: &str, args: &[Value]) -> Result<String, EvaluationError> {
    let tokens = tokenize(template)?;
    evaluate(template, &tokens, args)
}

/// Evaluate a tokenized parameterized string
///
/// # Arguments
/// * `template` - the string the tokens were produced from
/// * `tokens`   - tokens of `template` in order
/// * `args`     - values for `%p1` to `%p9`; missing ones read as 0
///
/// Template text not covered by any token is copied unchanged, so an empty
/// token list returns the template as is. Binary operators take the first
/// popped value as their right operand: `%{3}%{4}%-` leaves -1.
pub fn evaluate(
    template: &str,
    tokens: &[ParameterToken],
    args: &[Value],
) -> Result<String, EvaluationError> {
    Machine::new(template, args).run(tokens)
}

/// Evaluation state, local to one call
struct Machine<'a> {
    template: &'a str,
    // copy of the arguments so that %i does not touch the caller's values
    params: Vec<Value>,
    incremented: bool,
    stack: Vec<Value>,
    // a-z then A-Z
    variables: [Value; 52],
    output: String,
    cursor: usize,
}

impl<'a> Machine<'a> {
    fn new(template: &'a str, args: &[Value]) -> Self {
        Self {
            template,
            params: args.to_vec(),
            incremented: false,
            stack: Vec::new(),
            variables: from_fn(|_| Value::default()),
            // expanded string will only rarely be larger than the template
            output: String::with_capacity(template.len()),
            cursor: 0,
        }
    }

    fn run(mut self, tokens: &[ParameterToken]) -> Result<String, EvaluationError> {
        let mut index = 0;
        while let Some(token) = tokens.get(index) {
            let end = self.span_end(token)?;
            self.output.push_str(&self.template[self.cursor..token.offset]);
            self.cursor = end;
            index += 1;

            match &token.kind {
                TokenKind::Literal => self.output.push_str(&token.representation),
                TokenKind::EscapedPercent => self.output.push('%'),
                TokenKind::PushConstant(value) => self.stack.push(value.clone()),
                TokenKind::PushParamRef(n @ 1..=9) => {
                    let value = self
                        .params
                        .get(usize::from(*n) - 1)
                        .cloned()
                        .unwrap_or_default();
                    self.stack.push(value);
                }
                TokenKind::PushParamRef(_) => {
                    return Err(EvaluationError::TokenMismatch {
                        offset: token.offset,
                    });
                }
                TokenKind::PopAsChar => {
                    let c = match self.pop(token)? {
                        Value::Char(c) => c,
                        // ncurses sends 0200 for NUL
                        Value::Number(0) => '\u{80}',
                        Value::Number(n) => u32::try_from(n)
                            .ok()
                            .and_then(char::from_u32)
                            .ok_or(EvaluationError::InvalidCharacter {
                                offset: token.offset,
                                value: n,
                            })?,
                        Value::Str(_) => {
                            return Err(EvaluationError::TypeMismatch {
                                offset: token.offset,
                                operator: token.representation.clone(),
                            });
                        }
                    };
                    self.output.push(c);
                }
                TokenKind::PopAsString => {
                    let value = self.pop(token)?;
                    self.output.push_str(&value.to_string());
                }
                TokenKind::Formatting(spec) => {
                    let value = self.pop(token)?;
                    let formatted = format(&value, spec).ok_or_else(|| not_numeric(token, &value))?;
                    self.output.push_str(&formatted);
                }
                TokenKind::ArithmeticOp(op) => {
                    let (x, y) = self.pop_operands(token)?;
                    let result = match op {
                        ArithmeticOp::Add => x.wrapping_add(y),
                        ArithmeticOp::Sub => x.wrapping_sub(y),
                        ArithmeticOp::Mul => x.wrapping_mul(y),
                        // ncurses yields 0 for division by zero
                        ArithmeticOp::Div if y == 0 => 0,
                        ArithmeticOp::Div => x.wrapping_div(y),
                        ArithmeticOp::Mod if y == 0 => 0,
                        ArithmeticOp::Mod => x.wrapping_rem(y),
                    };
                    self.stack.push(Value::Number(result));
                }
                TokenKind::BitwiseOp(op) => {
                    let (x, y) = self.pop_operands(token)?;
                    let result = match op {
                        BitwiseOp::And => x & y,
                        BitwiseOp::Or => x | y,
                        BitwiseOp::Xor => x ^ y,
                    };
                    self.stack.push(Value::Number(result));
                }
                TokenKind::LogicalOp(op) => {
                    let (x, y) = self.pop_operands(token)?;
                    let result = match op {
                        LogicalOp::Eq => x == y,
                        LogicalOp::Gt => x > y,
                        LogicalOp::Lt => x < y,
                        LogicalOp::And => x != 0 && y != 0,
                        LogicalOp::Or => x != 0 || y != 0,
                    };
                    self.stack.push(Value::from(result));
                }
                TokenKind::UnaryOp(op) => {
                    let x = self.pop_number(token)?;
                    let result = match op {
                        UnaryOp::Not => i32::from(x == 0),
                        UnaryOp::BitComplement => !x,
                    };
                    self.stack.push(Value::Number(result));
                }
                TokenKind::StringLength => {
                    let length = match self.pop(token)? {
                        Value::Str(s) => s.chars().count(),
                        Value::Char(_) => 1,
                        Value::Number(n) => n.to_string().len(),
                    };
                    self.stack
                        .push(Value::Number(i32::try_from(length).unwrap_or(i32::MAX)));
                }
                TokenKind::IncrementParams => {
                    // The increment should only be done once
                    if !self.incremented {
                        for param in self.params.iter_mut().take(2) {
                            let Some(n) = param.to_number() else {
                                return Err(not_numeric(token, param));
                            };
                            *param = Value::Number(n.wrapping_add(1));
                        }
                        self.incremented = true;
                    }
                }
                TokenKind::SetVariable(name) => {
                    let slot = variable_slot(*name).ok_or(EvaluationError::TokenMismatch {
                        offset: token.offset,
                    })?;
                    self.variables[slot] = self.pop(token)?;
                }
                TokenKind::GetVariable(name) => {
                    let slot = variable_slot(*name).ok_or(EvaluationError::TokenMismatch {
                        offset: token.offset,
                    })?;
                    self.stack.push(self.variables[slot].clone());
                }
                TokenKind::ConditionalStart | TokenKind::ConditionalEnd => (),
                TokenKind::ConditionalThen => {
                    if self.pop_number(token)? == 0 {
                        index = self.skip_branch(tokens, index, true)?;
                    }
                }
                TokenKind::ConditionalElse => {
                    index = self.skip_branch(tokens, index, false)?;
                }
            }
        }

        self.output.push_str(&self.template[self.cursor..]);
        Ok(self.output)
    }

    /// End of the token's span, checking that the token describes the template there
    fn span_end(&self, token: &ParameterToken) -> Result<usize, EvaluationError> {
        let end = token.end();
        if token.offset >= self.cursor
            && self.template.get(token.offset..end) == Some(token.representation.as_str())
        {
            Ok(end)
        } else {
            Err(EvaluationError::TokenMismatch {
                offset: token.offset,
            })
        }
    }

    /// Skip tokens up to and including the `%e` (if `to_else`) or `%;` closing
    /// the current conditional level, returning the index to resume at
    fn skip_branch(
        &mut self,
        tokens: &[ParameterToken],
        from: usize,
        to_else: bool,
    ) -> Result<usize, EvaluationError> {
        let mut level = 0usize;
        for (index, token) in tokens.iter().enumerate().skip(from) {
            let found = match token.kind {
                TokenKind::ConditionalStart => {
                    level += 1;
                    false
                }
                TokenKind::ConditionalEnd if level > 0 => {
                    level -= 1;
                    false
                }
                TokenKind::ConditionalEnd => true,
                TokenKind::ConditionalElse => to_else && level == 0,
                _ => false,
            };
            if found {
                self.cursor = self.span_end(token)?;
                return Ok(index + 1);
            }
        }
        // unterminated conditional swallows the rest of the template
        self.cursor = self.template.len();
        Ok(tokens.len())
    }

    fn pop(&mut self, token: &ParameterToken) -> Result<Value, EvaluationError> {
        self.stack
            .pop()
            .ok_or_else(|| EvaluationError::StackUnderflow {
                offset: token.offset,
                operator: token.representation.clone(),
            })
    }

    fn pop_number(&mut self, token: &ParameterToken) -> Result<i32, EvaluationError> {
        let value = self.pop(token)?;
        value.to_number().ok_or_else(|| not_numeric(token, &value))
    }

    /// Pop the right operand, then the left one
    fn pop_operands(&mut self, token: &ParameterToken) -> Result<(i32, i32), EvaluationError> {
        if self.stack.len() < 2 {
            return Err(EvaluationError::StackUnderflow {
                offset: token.offset,
                operator: token.representation.clone(),
            });
        }
        let y = self.pop_number(token)?;
        let x = self.pop_number(token)?;
        Ok((x, y))
    }
}

fn not_numeric(token: &ParameterToken, value: &Value) -> EvaluationError {
    EvaluationError::NotNumeric {
        offset: token.offset,
        value: value.to_string(),
    }
}

const fn variable_slot(name: char) -> Option<usize> {
    match name {
        'a'..='z' => Some(name as usize - 'a' as usize),
        'A'..='Z' => Some(26 + name as usize - 'A' as usize),
        _ => None,
    }
}

/// Render a value for a printf-style directive, `None` if a numeric
/// conversion gets a value that is not a number
fn format(value: &Value, spec: &FormatSpec) -> Option<String> {
    let (prefix, mut digits) = match spec.conversion {
        Conversion::String => {
            let mut text = value.to_string();
            if let Some(precision) = spec.precision
                && let Some((cut, _)) = text.char_indices().nth(usize::from(precision))
            {
                text.truncate(cut);
            }
            return Some(pad("", &text, spec, false));
        }
        Conversion::Decimal => {
            let d = value.to_number()?;
            let sign = if d < 0 {
                "-"
            } else if spec.sign {
                "+"
            } else if spec.space {
                " "
            } else {
                ""
            };
            (sign, d.unsigned_abs().to_string())
        }
        Conversion::Octal => ("", format!("{:o}", value.to_number()? as u32)),
        Conversion::Hex => {
            let d = value.to_number()? as u32;
            (if spec.alternate && d != 0 { "0x" } else { "" }, format!("{d:x}"))
        }
        Conversion::HexUpper => {
            let d = value.to_number()? as u32;
            (if spec.alternate && d != 0 { "0X" } else { "" }, format!("{d:X}"))
        }
    };

    if let Some(precision) = spec.precision.map(usize::from) {
        if precision == 0 && digits == "0" {
            digits.clear();
        } else if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }
    // Leading octal zero counts against precision.
    if spec.conversion == Conversion::Octal && spec.alternate && !digits.starts_with('0') {
        digits.insert(0, '0');
    }

    Some(pad(prefix, &digits, spec, true))
}

fn pad(prefix: &str, body: &str, spec: &FormatSpec, numeric: bool) -> String {
    let width = usize::from(spec.width);
    let length = prefix.chars().count() + body.chars().count();
    if length >= width {
        return format!("{prefix}{body}");
    }
    let fill = width - length;
    if spec.left {
        format!("{prefix}{body}{:fill$}", "")
    } else if spec.zero && numeric && spec.precision.is_none() {
        format!("{prefix}{}{body}", "0".repeat(fill))
    } else {
        format!("{:fill$}{prefix}{body}", "")
    }
}

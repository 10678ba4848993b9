// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Padding markers in expanded capability strings
//!
//! Capability strings may request a delay after some output with a marker
//! like `$<5>`, `$<2.5*>` or `$<100/>`. The delay is in milliseconds with one
//! optional decimal digit. `*` makes the delay proportional to the number of
//! affected lines, `/` makes it mandatory even if the terminal supports flow
//! control. This module only describes the delays, sending the output and
//! waiting is up to the caller.

use std::{iter::Peekable, str::CharIndices, time::Duration};

/// Errors reported when splitting a string at padding markers
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `$<` without the closing `>`
    #[error("Unterminated padding marker at offset {offset}")]
    Unterminated { offset: usize },
    /// The marker does not describe a delay
    #[error("Invalid padding delay at offset {offset}")]
    InvalidDelay { offset: usize },
}

/// Delay requested by a padding marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub delay: Duration,
    pub proportional: bool,
    pub mandatory: bool,
}

impl Padding {
    /// Delay for an operation affecting `lines` lines
    #[must_use]
    pub fn scaled(&self, lines: u32) -> Duration {
        if self.proportional {
            self.delay.saturating_mul(lines)
        } else {
            self.delay
        }
    }
}

/// Text to be sent followed by an optional delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub padding: Option<Padding>,
}

/// Split an expanded string at padding markers
///
/// Every marker ends a segment. Text after the last marker forms a segment
/// without padding. A `$` not followed by `<` is ordinary text.
pub fn split(expanded: &str) -> Result<Vec<Segment>, Error> {
    let mut segments = vec![];
    let mut text = String::new();
    let mut chars = expanded.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c == '$' && chars.next_if(|&(_, c)| c == '<').is_some() {
            let padding = scan_marker(start, &mut chars)?;
            segments.push(Segment {
                text: std::mem::take(&mut text),
                padding: Some(padding),
            });
        } else {
            text.push(c);
        }
    }

    if !text.is_empty() {
        segments.push(Segment {
            text,
            padding: None,
        });
    }

    Ok(segments)
}

/// Remove padding markers, keeping the text
pub fn strip(expanded: &str) -> Result<String, Error> {
    Ok(split(expanded)?
        .into_iter()
        .map(|segment| segment.text)
        .collect())
}

/// Parse the marker after `$<` at `start` up to and including `>`
fn scan_marker(start: usize, chars: &mut Peekable<CharIndices<'_>>) -> Result<Padding, Error> {
    let invalid = Error::InvalidDelay { offset: start };
    let mut tenths: u64 = 0;
    let mut seen_digit = false;

    while let Some((_, digit)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        tenths = tenths
            .checked_mul(10)
            .and_then(|value| value.checked_add(u64::from(digit as u8 - b'0')))
            .ok_or(invalid)?;
        seen_digit = true;
    }
    tenths = tenths.checked_mul(10).ok_or(invalid)?;

    if chars.next_if(|&(_, c)| c == '.').is_some() {
        // Only the first decimal digit counts.
        if let Some((_, digit)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
            tenths = tenths
                .checked_add(u64::from(digit as u8 - b'0'))
                .ok_or(invalid)?;
            seen_digit = true;
        }
        while chars.next_if(|&(_, c)| c.is_ascii_digit()).is_some() {}
    }

    let mut padding = Padding {
        delay: Duration::from_micros(tenths.saturating_mul(100)),
        proportional: false,
        mandatory: false,
    };

    loop {
        match chars.next() {
            Some((_, '*')) => padding.proportional = true,
            Some((_, '/')) => padding.mandatory = true,
            Some((_, '>')) if seen_digit => return Ok(padding),
            Some(_) => return Err(invalid),
            None => return Err(Error::Unterminated { offset: start }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{StringCapability, Value, builtin, parse::load};

    fn padded(text: &str, millis: u64, proportional: bool, mandatory: bool) -> Segment {
        Segment {
            text: text.to_string(),
            padding: Some(Padding {
                delay: Duration::from_millis(millis),
                proportional,
                mandatory,
            }),
        }
    }

    fn plain(text: &str) -> Segment {
        Segment {
            text: text.to_string(),
            padding: None,
        }
    }

    #[test]
    fn no_markers() {
        assert_eq!(split(""), Ok(vec![]));
        assert_eq!(split("\x1b[H\x1b[2J"), Ok(vec![plain("\x1b[H\x1b[2J")]));
        assert_eq!(split("$5 costs $"), Ok(vec![plain("$5 costs $")]));
    }

    #[test]
    fn simple_delay() {
        assert_eq!(
            split("\x1b[H\x1b[J$<50>"),
            Ok(vec![padded("\x1b[H\x1b[J", 50, false, false)])
        );
    }

    #[test]
    fn flags() {
        assert_eq!(split("a$<5*>"), Ok(vec![padded("a", 5, true, false)]));
        assert_eq!(split("a$<5/>"), Ok(vec![padded("a", 5, false, true)]));
        assert_eq!(split("a$<5*/>"), Ok(vec![padded("a", 5, true, true)]));
        assert_eq!(split("a$<5/*>"), Ok(vec![padded("a", 5, true, true)]));
    }

    #[test]
    fn fractional_delay() {
        let segments = split("$<2.5>").unwrap();
        assert_eq!(
            segments[0].padding.map(|padding| padding.delay),
            Some(Duration::from_micros(2500))
        );
        let segments = split("$<.25>").unwrap();
        assert_eq!(
            segments[0].padding.map(|padding| padding.delay),
            Some(Duration::from_micros(200))
        );
    }

    #[test]
    fn several_markers() {
        assert_eq!(
            split("\x1b[1;1H$<5>\x1b[K$<3*>done"),
            Ok(vec![
                padded("\x1b[1;1H", 5, false, false),
                padded("\x1b[K", 3, true, false),
                plain("done"),
            ])
        );
        assert_eq!(
            split("$<1>$<2>"),
            Ok(vec![padded("", 1, false, false), padded("", 2, false, false)])
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(split("ab$<5"), Err(Error::Unterminated { offset: 2 }));
        assert_eq!(split("$<"), Err(Error::Unterminated { offset: 0 }));
        assert_eq!(split("x$<>"), Err(Error::InvalidDelay { offset: 1 }));
        assert_eq!(split("$<5ms>"), Err(Error::InvalidDelay { offset: 0 }));
        assert_eq!(
            split("$<99999999999999999999>"),
            Err(Error::InvalidDelay { offset: 0 })
        );
        assert_eq!(
            split("$<1844674407370955161.9>"),
            Err(Error::InvalidDelay { offset: 0 })
        );
    }

    #[test]
    fn scaled_delay() {
        let padding = split("$<4*>").unwrap()[0].padding.unwrap();
        assert_eq!(padding.scaled(3), Duration::from_millis(12));
        let padding = split("$<4>").unwrap()[0].padding.unwrap();
        assert_eq!(padding.scaled(3), Duration::from_millis(4));
    }

    #[test]
    fn stripped() {
        assert_eq!(strip("\x1b[H$<5>\x1b[J$<2*>"), Ok("\x1b[H\x1b[J".to_string()));
        assert_eq!(strip("plain"), Ok("plain".to_string()));
    }

    #[test]
    fn expanded_capability() {
        let catalog = load(builtin::find("vt100").unwrap().1).unwrap();
        for (_, value) in catalog.strings() {
            let Ok(expanded) = value.expand(&[Value::from(1), Value::from(1)]) else {
                continue;
            };
            assert!(strip(&expanded).is_ok(), "{expanded:?}");
        }

        let clear = catalog.get_string(StringCapability::ClearScreen).unwrap();
        assert_eq!(
            split(&clear.expand(&[]).unwrap()),
            Ok(vec![padded("\x1b[H\x1b[J", 50, false, false)])
        );
    }
}

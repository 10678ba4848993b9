// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoding compiled terminfo entries

use std::{io::Cursor, mem};

use tracing::trace;

use crate::{
    capabilities::{BooleanCapability, NumericCapability, StringCapability},
    catalog::{CapabilityValue, Catalog, ExtendedCapabilities, decode},
};

const ABSENT_ENTRY: i32 = -1;
const CANCELED_ENTRY: i32 = -2;

#[repr(u16)]
enum TerminfoMagic {
    /// Original format, 16-bit numbers
    Magic1 = 0x011a,
    /// 32-bit numbers
    Magic2 = 0x021e,
}

/// What is wrong with a compiled entry
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The data ends before a section declared in the header
    #[error("Truncated terminfo data")]
    Truncated,
    /// The magic number is invalid or unsupported
    #[error("Unknown magic number {0:#06x}")]
    BadMagic(u16),
    /// More standard capabilities than this library knows
    #[error("Too many capabilities")]
    TooManyCapabilities,
    /// Negative number other than the absent and canceled markers
    #[error("Invalid number {0}")]
    InvalidNumber(i32),
    /// Negative string offset other than the absent and canceled markers
    #[error("Invalid string offset {0}")]
    InvalidStringOffset(i32),
    /// String offset past the end of the string table
    #[error("String offset {0} outside the string table")]
    StringOutOfBounds(usize),
    /// A string is not terminated by the NUL byte
    #[error("String without final NUL")]
    UnterminatedString,
    /// Two extended capabilities share a name
    #[error("Duplicate extended capability {0}")]
    DuplicateExtendedName(String),
}

/// Errors reported when decoding a terminfo entry
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct Error {
    /// Byte offset in the input where decoding failed
    pub offset: usize,
    pub kind: ErrorKind,
}

impl Error {
    const fn new(offset: usize, kind: ErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// Decode a compiled terminfo entry
///
/// Returns a fully populated `Catalog` or the first problem found. Any data
/// after the aligned string table must form a complete extended block.
pub fn load(buffer: &[u8]) -> Result<Catalog, Error> {
    let mut loader = Loader {
        reader: Cursor::new(buffer),
        number_size: 2,
    };
    let mut catalog = loader.parse_base()?;

    let mut position = loader.position();
    if position & 1 == 1 {
        position += 1;
    }
    if position < buffer.len() {
        loader.reader.set_position(position as u64);
        catalog.extended = loader.parse_extended()?;
    }

    trace!(
        name = catalog.canonical_name(),
        booleans = catalog.booleans.len(),
        numerics = catalog.numerics.len(),
        strings = catalog.strings.len(),
        extended = catalog.extended.count(),
        "decoded terminfo entry"
    );

    Ok(catalog)
}

struct Loader<'a> {
    reader: Cursor<&'a [u8]>,
    number_size: usize,
}

impl<'a> Loader<'a> {
    fn position(&self) -> usize {
        self.reader.position() as usize
    }

    /// Skip a byte if needed to ensure 2-byte alignment
    fn align(&mut self) {
        let position = self.reader.position();
        if position & 1 == 1 {
            self.reader.set_position(position + 1);
        }
    }

    fn read_slice(&mut self, size: usize) -> Result<&'a [u8], Error> {
        let start = self.position();
        let buffer: &'a [u8] = *self.reader.get_ref();
        let Some(slice) = start
            .checked_add(size)
            .and_then(|end| buffer.get(start..end))
        else {
            return Err(Error::new(start.min(buffer.len()), ErrorKind::Truncated));
        };
        self.reader.set_position((start + size) as u64);
        Ok(slice)
    }

    fn read_le16(&mut self) -> Result<u16, Error> {
        let bytes = self.read_slice(mem::size_of::<u16>())?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_number(&mut self) -> Result<Option<i32>, Error> {
        let position = self.position();
        let bytes = self.read_slice(self.number_size)?;
        let value = match *bytes {
            [b0, b1, b2, b3] => i32::from_le_bytes([b0, b1, b2, b3]),
            [b0, b1] => i32::from(i16::from_le_bytes([b0, b1])),
            _ => unreachable!("logic error"),
        };
        match value {
            ABSENT_ENTRY | CANCELED_ENTRY => Ok(None),
            value if value < 0 => Err(Error::new(position, ErrorKind::InvalidNumber(value))),
            value => Ok(Some(value)),
        }
    }

    /// Parse header, names and standard capabilities
    fn parse_base(&mut self) -> Result<Catalog, Error> {
        let magic = self.read_le16()?;
        self.number_size = match magic {
            val if val == TerminfoMagic::Magic1 as u16 => 2,
            val if val == TerminfoMagic::Magic2 as u16 => 4,
            val => return Err(Error::new(0, ErrorKind::BadMagic(val))),
        };

        let name_size = usize::from(self.read_le16()?);
        let counts_position = self.position();
        let bool_count = usize::from(self.read_le16()?);
        let num_count = usize::from(self.read_le16()?);
        let str_count = usize::from(self.read_le16()?);
        let str_size = usize::from(self.read_le16()?);

        if bool_count > BooleanCapability::ALL.len()
            || num_count > NumericCapability::ALL.len()
            || str_count > StringCapability::ALL.len()
        {
            return Err(Error::new(
                counts_position,
                ErrorKind::TooManyCapabilities,
            ));
        }

        let names_position = self.position();
        let names = self.read_slice(name_size)?;
        let Some(names_length) = names.iter().position(|c| *c == b'\0') else {
            return Err(Error::new(names_position, ErrorKind::UnterminatedString));
        };
        let names = decode(&names[..names_length])
            .split('|')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        let booleans = self
            .read_slice(bool_count)?
            .iter()
            .map(|&value| check_boolean(value))
            .collect();

        self.align();

        let numerics = (0..num_count)
            .map(|_| self.read_number())
            .collect::<Result<_, _>>()?;

        let offsets_position = self.position();
        let str_offsets = self.read_slice(mem::size_of::<u16>() * str_count)?;
        let table_position = self.position();
        let str_table = self.read_slice(str_size)?;

        let mut strings = Vec::with_capacity(str_count);
        for (index, offset) in str_offsets.chunks_exact(2).enumerate() {
            let position = offsets_position + 2 * index;
            let value = match check_offset(offset, position)? {
                Some(offset) => Some(CapabilityValue::template(decode(get_string(
                    str_table,
                    offset,
                    table_position,
                )?))),
                None => None,
            };
            strings.push(value);
        }

        Ok(Catalog {
            names,
            booleans,
            numerics,
            strings,
            extended: ExtendedCapabilities::default(),
        })
    }

    /// Parse extended capabilities
    fn parse_extended(&mut self) -> Result<ExtendedCapabilities, Error> {
        let bool_count = usize::from(self.read_le16()?);
        let num_count = usize::from(self.read_le16()?);
        let str_count = usize::from(self.read_le16()?);
        let _ext_str_usage = usize::from(self.read_le16()?);
        let str_limit = usize::from(self.read_le16()?);

        let bools = self.read_slice(bool_count)?;
        self.align();

        let numbers: Vec<Option<i32>> = (0..num_count)
            .map(|_| self.read_number())
            .collect::<Result<_, _>>()?;

        let offsets_position = self.position();
        let str_offsets = self.read_slice(mem::size_of::<u16>() * str_count)?;

        let name_count = bool_count + num_count + str_count;
        let names_position = self.position();
        let name_offsets = self.read_slice(mem::size_of::<u16>() * name_count)?;

        let table_position = self.position();
        let str_table = self.read_slice(str_limit)?;

        // String values come first in the table, names follow them
        let mut values = Vec::with_capacity(str_count);
        let mut names_base = 0;
        for (index, offset) in str_offsets.chunks_exact(2).enumerate() {
            let position = offsets_position + 2 * index;
            let value = match check_offset(offset, position)? {
                Some(offset) => {
                    let value = get_string(str_table, offset, table_position)?;
                    names_base += value.len() + 1;
                    Some(value)
                }
                None => None,
            };
            values.push(value);
        }

        let Some(names_table) = str_table.get(names_base..) else {
            return Err(Error::new(
                table_position,
                ErrorKind::StringOutOfBounds(names_base),
            ));
        };
        let names_table_position = table_position + names_base;

        let mut names = name_offsets
            .chunks_exact(2)
            .enumerate()
            .map(|(index, offset)| {
                let position = names_position + 2 * index;
                let Some(offset) = check_offset(offset, position)? else {
                    return Err(Error::new(
                        position,
                        ErrorKind::InvalidStringOffset(i32::from(le16(offset) as i16)),
                    ));
                };
                let name = decode(get_string(names_table, offset, names_table_position)?);
                Ok((name, names_table_position + offset))
            });

        let mut extended = ExtendedCapabilities::default();

        for (&value, name) in bools.iter().zip(&mut names) {
            let (name, position) = name?;
            check_unique(&extended, &name, position)?;
            if let Some(value) = check_boolean(value) {
                extended.booleans.insert(name, value);
            }
        }

        for (value, name) in numbers.into_iter().zip(&mut names) {
            let (name, position) = name?;
            check_unique(&extended, &name, position)?;
            if let Some(value) = value {
                extended.numerics.insert(name, value);
            }
        }

        for (value, name) in values.into_iter().zip(&mut names) {
            let (name, position) = name?;
            check_unique(&extended, &name, position)?;
            if let Some(value) = value {
                extended
                    .strings
                    .insert(name, CapabilityValue::template(decode(value)));
            }
        }

        Ok(extended)
    }
}

fn le16(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Convert the boolean byte, `None` for absent and canceled entries
const fn check_boolean(value: u8) -> Option<bool> {
    match value {
        0 => Some(false),
        0xfe | 0xff => None,
        _ => Some(true),
    }
}

/// Convert ABSENT and CANCELED to None, reject other negative offsets
fn check_offset(bytes: &[u8], position: usize) -> Result<Option<usize>, Error> {
    let value = le16(bytes);
    match i32::from(value as i16) {
        ABSENT_ENTRY | CANCELED_ENTRY => Ok(None),
        offset if offset < 0 => Err(Error::new(
            position,
            ErrorKind::InvalidStringOffset(offset),
        )),
        _ => Ok(Some(usize::from(value))),
    }
}

fn check_unique(
    extended: &ExtendedCapabilities,
    name: &str,
    position: usize,
) -> Result<(), Error> {
    if extended.exists(name) {
        Err(Error::new(
            position,
            ErrorKind::DuplicateExtendedName(name.to_string()),
        ))
    } else {
        Ok(())
    }
}

fn get_string(string_table: &[u8], offset: usize, table_position: usize) -> Result<&[u8], Error> {
    let Some(string_slice) = string_table.get(offset..) else {
        return Err(Error::new(
            table_position,
            ErrorKind::StringOutOfBounds(offset),
        ));
    };
    if let Some(string_length) = string_slice.iter().position(|c| *c == b'\0') {
        Ok(&string_slice[..string_length])
    } else {
        Err(Error::new(
            table_position + offset,
            ErrorKind::UnterminatedString,
        ))
    }
}

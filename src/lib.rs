// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Terminfo capability engine
//!
//! Loads compiled terminfo entries, finds them on disk or among the bundled
//! entries, and expands parameterized capability strings into the sequences
//! the terminal understands.
//!
//! ```
//! use terminfo_engine::{StringCapability, Value};
//!
//! let catalog = terminfo_engine::resolve_safe(Some("xterm-256color"));
//! let cup = catalog.get_string(StringCapability::CursorAddress).unwrap();
//! let sequence = cup.expand(&[Value::from(5), Value::from(10)]).unwrap();
//! assert_eq!(sequence, "\x1b[6;11H");
//! ```

pub mod builtin;
pub mod capabilities;
pub mod catalog;
pub mod evaluate;
pub mod locate;
pub mod padding;
pub mod parse;
pub mod resolve;
pub mod tokenize;

pub use capabilities::{BooleanCapability, NumericCapability, StringCapability};
pub use catalog::{CapabilityKind, CapabilityValue, Catalog, ExtendedCapabilities};
pub use evaluate::{EvaluationError, Value, evaluate, expand};
pub use padding::{Padding, Segment};
pub use parse::load;
pub use resolve::{current, fallback, resolve, resolve_safe, try_resolve};
pub use tokenize::{ParameterToken, SyntaxError, TokenKind, tokenize};

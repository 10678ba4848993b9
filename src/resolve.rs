// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Finding and loading the catalog for a terminal

use std::{env, fs, sync::LazyLock};

use tracing::{debug, error, trace};

use crate::{builtin, catalog::Catalog, locate, parse};

// The bundled entry is checked by the `builtin` tests, an empty catalog only
// stands in for a broken build.
static FALLBACK: LazyLock<Catalog> = LazyLock::new(|| {
    parse::load(builtin::fallback()).unwrap_or_else(|err| {
        error!(%err, name = builtin::FALLBACK_NAME, "bundled fallback is malformed");
        Catalog::default()
    })
});

static CURRENT: LazyLock<Catalog> = LazyLock::new(|| resolve_safe(None));

/// Errors reported when resolving a terminal name to a catalog
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Neither the search directories nor the bundled entries have the terminal
    #[error("No terminfo entry for {name}")]
    NotFound { name: String },
    /// The name cannot be used to look up a file
    #[error("Invalid terminal name {0:?}")]
    InvalidTerminalName(String),
    /// The entry was found but could not be decoded
    #[error("Malformed terminfo entry {origin}")]
    Format {
        origin: String,
        #[source]
        source: parse::Error,
    },
}

/// Find and load the catalog for a terminal
///
/// # Arguments
///
/// * `term_name` - terminal name, `TERM` is used if it is `None` or empty.
///
/// If `TERM` is needed but not set, the fallback catalog is returned. Files in
/// the search directories are tried first, then the bundled entries. The first
/// readable file is decoded and returned, even if decoding fails.
pub fn resolve(term_name: Option<&str>) -> Result<Catalog, Error> {
    let term_name = match term_name.filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => match env::var("TERM") {
            Ok(name) if !name.is_empty() => name,
            _ => {
                debug!(
                    fallback = builtin::FALLBACK_NAME,
                    "TERM is not set, using the fallback"
                );
                return Ok(fallback().clone());
            }
        },
    };

    let files = match locate::locate_all(&term_name) {
        Ok(files) => files,
        Err(locate::Error::InvalidTerminalName) => {
            return Err(Error::InvalidTerminalName(term_name));
        }
        Err(err) => {
            trace!(%err, "no terminfo files");
            vec![]
        }
    };

    for file in files {
        let buffer = match fs::read(&file) {
            Ok(buffer) => buffer,
            Err(err) => {
                trace!(file = %file.display(), %err, "cannot read terminfo file");
                continue;
            }
        };
        debug!(file = %file.display(), "loading terminfo file");
        return parse::load(&buffer).map_err(|source| Error::Format {
            origin: file.display().to_string(),
            source,
        });
    }

    if let Some((name, data)) = builtin::find(&term_name) {
        debug!(name, "loading bundled terminfo entry");
        return parse::load(data).map_err(|source| Error::Format {
            origin: format!("bundled {name}"),
            source,
        });
    }

    Err(Error::NotFound { name: term_name })
}

/// Find and load the catalog for a terminal, `None` on any failure
#[must_use]
pub fn try_resolve(term_name: Option<&str>) -> Option<Catalog> {
    resolve(term_name).ok()
}

/// Find and load the catalog for a terminal, use the fallback on any failure
#[must_use]
pub fn resolve_safe(term_name: Option<&str>) -> Catalog {
    match resolve(term_name) {
        Ok(catalog) => catalog,
        Err(err) => {
            debug!(%err, fallback = builtin::FALLBACK_NAME, "using the fallback");
            fallback().clone()
        }
    }
}

/// Catalog for the terminal named by `TERM`, loaded once per process
pub fn current() -> &'static Catalog {
    &CURRENT
}

/// Catalog of the bundled fallback entry, loaded once per process
pub fn fallback() -> &'static Catalog {
    &FALLBACK
}

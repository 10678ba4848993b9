// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compiled entries bundled with the library
//!
//! Used when a terminal is not found on disk, and as the fallback when
//! nothing usable is found at all.

/// Name of the bundled entry used when nothing else is available
pub const FALLBACK_NAME: &str = "xterm-256color";

macro_rules! bundled {
    ($($leaf:literal / $name:literal,)*) => {
        &[$(
            (
                $name,
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/terminfo/", $leaf, "/", $name)),
            ),
        )*]
    };
}

static BUILTINS: &[(&str, &[u8])] = bundled![
    "E" / "Eterm",
    "a" / "ansi",
    "c" / "cygwin",
    "d" / "dumb",
    "l" / "linux",
    "r" / "rxvt-unicode-256color",
    "s" / "screen",
    "s" / "screen-256color",
    "t" / "tmux",
    "t" / "tmux-256color",
    "v" / "vt100",
    "v" / "vt220",
    "x" / "xterm",
    "x" / "xterm-256color",
];

/// Names of the bundled entries
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

/// Compiled data of a bundled entry, the name is matched ignoring ASCII case
///
/// Returns the entry name as bundled together with its data.
#[must_use]
pub fn find(term_name: &str) -> Option<(&'static str, &'static [u8])> {
    BUILTINS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(term_name))
        .copied()
}

/// Compiled data of the fallback entry
#[must_use]
pub const fn fallback() -> &'static [u8] {
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/terminfo/x/xterm-256color"))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{capabilities::StringCapability, parse::load};

    #[test]
    fn all_builtins_load() {
        for name in names() {
            let (_, data) = find(name).unwrap();
            let catalog = load(data).unwrap();
            assert_eq!(catalog.canonical_name(), name);
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            find("XTERM-256COLOR").map(|(name, _)| name),
            Some("xterm-256color")
        );
        assert_eq!(find("eterm").map(|(name, _)| name), Some("Eterm"));
        assert_eq!(find("no-such-terminal"), None);
    }

    #[test]
    fn fallback_entry() {
        let catalog = load(fallback()).unwrap();
        assert_eq!(catalog.canonical_name(), FALLBACK_NAME);
        assert_eq!(find(FALLBACK_NAME).map(|(_, data)| data), Some(fallback()));
        assert!(catalog.get_string(StringCapability::CursorAddress).is_some());
    }

    #[test]
    fn code_page_graphics() {
        let catalog = load(find("ansi").unwrap().1).unwrap();
        let acsc = catalog
            .get_string(StringCapability::AcsChars)
            .unwrap()
            .value();
        assert!(acsc.chars().any(|c| u32::from(c) > 0x7f));
    }
}

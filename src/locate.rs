// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Where compiled terminfo entries are looked up on disk

use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use tracing::trace;

/// System directories, searched last unless `TERMINFO_DIRS` places them earlier
#[cfg(unix)]
const SYSTEM_DIRS: &[&str] = &[
    "/etc/terminfo",
    "/lib/terminfo",
    "/usr/share/terminfo",
    "/usr/lib/terminfo",
    "/boot/system/data/terminfo", // haiku
];

#[cfg(not(unix))]
const SYSTEM_DIRS: &[&str] = &[];

/// Errors reported when looking for an entry on disk
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The name cannot be used as a file name
    #[error("Invalid terminal name")]
    InvalidTerminalName,
    /// No search directory has an entry for the terminal
    #[error("Terminfo entry not found")]
    FileNotFound,
}

/// Check that the name can be used as a file name in a leaf directory
pub fn is_valid_name(term_name: &OsStr) -> bool {
    let bytes = term_name.as_encoded_bytes();
    !bytes.is_empty()
        && bytes != b"."
        && bytes != b".."
        && !bytes.iter().any(|c| matches!(c, b'/' | b'\\' | b'\0'))
}

/// Existing entry files for the terminal in one directory
///
/// Leaf directories are named either by the first character of the terminal
/// name (`x/xterm`) or, where file names are case-insensitive, by its first
/// byte in hex (`78/xterm`). Both are checked, in that order.
fn entries_in(dir: &Path, term_name: &OsStr, first_byte: u8) -> impl Iterator<Item = PathBuf> {
    [
        char::from(first_byte).to_string(),
        format!("{first_byte:02x}"),
    ]
    .into_iter()
    .map(move |leaf| dir.join(leaf).join(term_name))
    .filter(|file| file.is_file())
}

/// Directories searched for entries, in search order
///
/// 1. `TERMINFO`, if not empty
/// 2. `~/.terminfo`
/// 3. every element of `TERMINFO_DIRS`, an empty element standing for the
///    system directories
/// 4. the system directories, unless already listed
///
/// The directories are not checked for existence.
pub fn search_directories() -> Vec<PathBuf> {
    let mut system_dirs = SYSTEM_DIRS.iter().map(PathBuf::from);

    let mut dirs: Vec<PathBuf> = env::var_os("TERMINFO")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .into_iter()
        .chain(env::home_dir().map(|home| home.join(".terminfo")))
        .collect();

    for dir in env::var_os("TERMINFO_DIRS")
        .iter()
        .flat_map(env::split_paths)
    {
        if dir.as_os_str().is_empty() {
            dirs.extend(&mut system_dirs);
        } else {
            dirs.push(dir);
        }
    }

    // Consumed above if `TERMINFO_DIRS` had an empty element.
    dirs.extend(system_dirs);
    dirs
}

/// Find all entry files for the terminal name
///
/// Returns existing files in search order, both leaf layouts for every
/// directory. The list is empty if nothing is found.
pub fn locate_all(term_name: impl AsRef<OsStr>) -> Result<Vec<PathBuf>, Error> {
    let term_name = term_name.as_ref();
    if !is_valid_name(term_name) {
        return Err(Error::InvalidTerminalName);
    }
    let first_byte = term_name.as_encoded_bytes()[0];

    let mut files = vec![];
    for dir in search_directories() {
        let found = files.len();
        files.extend(entries_in(&dir, term_name, first_byte));
        if files.len() == found {
            trace!(dir = %dir.display(), ?term_name, "no terminfo entry");
        }
    }
    Ok(files)
}

/// Find the first entry file for the terminal name
pub fn locate(term_name: impl AsRef<OsStr>) -> Result<PathBuf, Error> {
    locate_all(term_name)?
        .into_iter()
        .next()
        .ok_or(Error::FileNotFound)
}

#[cfg(test)]
mod test {
    use std::fs::{File, create_dir_all};

    use tempfile::{TempDir, tempdir};

    use super::*;

    const TERM_NAME: &str = "no-such-terminal-123";

    /// Create an empty entry for `TERM_NAME` under `root/leaf`
    fn make_entry(root: &Path, leaf: &str) -> PathBuf {
        let leaf_dir = root.join(leaf);
        create_dir_all(&leaf_dir).unwrap();
        let file = leaf_dir.join(TERM_NAME);
        File::create(&file).unwrap();
        file
    }

    fn dir_list(dirs: &[&Path]) -> std::ffi::OsString {
        env::join_paths(dirs).unwrap()
    }

    fn with_dirs(terminfo_dirs: &TempDir, check: impl FnOnce()) {
        let terminfo_dirs = dir_list(&[Path::new("foo"), terminfo_dirs.path(), Path::new("bar")]);
        temp_env::with_vars(
            [("TERMINFO_DIRS", Some(terminfo_dirs)), ("TERMINFO", None)],
            check,
        );
    }

    #[test]
    fn invalid_names() {
        for name in ["", ".", "..", "../xterm", "x/xterm", "a\\b", "nul\0"] {
            assert_eq!(locate(name), Err(Error::InvalidTerminalName), "{name:?}");
        }
        assert!(is_valid_name(OsStr::new("xterm-256color")));
        assert!(is_valid_name(OsStr::new(".hidden")));
    }

    #[test]
    fn missing_file() {
        // Distinct names, `TERM_NAME` entries are created under `temp_env`.
        assert_eq!(locate("no-such-terminal-1"), Err(Error::FileNotFound));
        assert_eq!(locate_all("no-such-terminal-2"), Ok(vec![]));
    }

    #[cfg(unix)]
    #[test]
    fn system_xterm() {
        let file = locate("xterm").unwrap();
        assert!(file.is_file());
        assert!(file.ends_with("xterm"));
    }

    #[test]
    fn letter_leaf_in_terminfo_dirs() {
        let root = tempdir().unwrap();
        let file = make_entry(root.path(), "n");
        with_dirs(&root, || assert_eq!(locate(TERM_NAME), Ok(file)));
    }

    #[test]
    fn hex_leaf_in_terminfo_dirs() {
        let root = tempdir().unwrap();
        let file = make_entry(root.path(), "6e");
        with_dirs(&root, || assert_eq!(locate(TERM_NAME), Ok(file)));
    }

    #[test]
    fn terminfo_variable() {
        let root = tempdir().unwrap();
        let file = make_entry(root.path(), "n");
        temp_env::with_vars(
            [("TERMINFO_DIRS", None), ("TERMINFO", Some(root.path()))],
            || assert_eq!(locate(TERM_NAME), Ok(file)),
        );
    }

    #[test]
    fn home_terminfo() {
        let home = tempdir().unwrap();
        let file = make_entry(&home.path().join(".terminfo"), "n");
        temp_env::with_vars(
            [
                ("TERMINFO_DIRS", None),
                ("TERMINFO", None),
                ("HOME", Some(home.path())),
            ],
            || assert_eq!(locate(TERM_NAME), Ok(file)),
        );
    }

    #[test]
    fn all_candidates_in_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let expected = vec![
            make_entry(first.path(), "n"),
            make_entry(first.path(), "6e"),
            make_entry(second.path(), "6e"),
        ];
        // A directory named like the terminal is not a candidate
        create_dir_all(second.path().join("n").join(TERM_NAME)).unwrap();

        temp_env::with_vars(
            [
                ("TERMINFO_DIRS", Some(second.path())),
                ("TERMINFO", Some(first.path())),
            ],
            || assert_eq!(locate_all(TERM_NAME), Ok(expected)),
        );
    }

    #[cfg(unix)]
    #[test]
    fn search_order() {
        let system = || SYSTEM_DIRS.iter().copied();
        let cases: [(&str, Vec<&str>); 3] = [
            (
                "/my/dir1:/my/dir2",
                ["/my/dir1", "/my/dir2"].into_iter().chain(system()).collect(),
            ),
            (
                "/my/dir1::/my/dir2",
                ["/my/dir1"]
                    .into_iter()
                    .chain(system())
                    .chain(["/my/dir2"])
                    .collect(),
            ),
            (
                ":/my/dir1:",
                system().chain(["/my/dir1"]).collect(),
            ),
        ];

        for (terminfo_dirs, tail) in cases {
            let expected: Vec<PathBuf> = ["/my/terminfo", "/home/user/.terminfo"]
                .into_iter()
                .chain(tail)
                .map(PathBuf::from)
                .collect();
            temp_env::with_vars(
                [
                    ("TERMINFO_DIRS", Some(terminfo_dirs)),
                    ("TERMINFO", Some("/my/terminfo")),
                    ("HOME", Some("/home/user")),
                ],
                || assert_eq!(search_directories(), expected, "{terminfo_dirs}"),
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn empty_terminfo_ignored() {
        temp_env::with_vars(
            [
                ("TERMINFO_DIRS", Some("/my/dir1")),
                ("TERMINFO", Some("")),
                ("HOME", Some("/home/user")),
            ],
            || {
                assert_eq!(
                    search_directories()[..2],
                    [
                        PathBuf::from("/home/user/.terminfo"),
                        PathBuf::from("/my/dir1")
                    ]
                );
            },
        );
    }
}

use std::fs;

use terminfo_engine::{
    CapabilityKind, Value, builtin,
    locate::{locate_all, search_directories},
    parse::load,
};

#[test]
fn test_all_terminals() {
    let dirs = search_directories();
    for dir in dirs {
        let Ok(dir) = fs::read_dir(&dir) else {
            continue;
        };
        for leaf in dir {
            let leaf = leaf.unwrap().path();
            let Ok(leaf) = fs::read_dir(&leaf) else {
                continue;
            };
            for term in leaf {
                let term = term.unwrap();
                if !term.path().is_file() {
                    continue;
                }
                let term_name = term.file_name();
                let terminfo_buffer = fs::read(term.path()).unwrap();
                let catalog = load(&terminfo_buffer)
                    .unwrap_or_else(|err| panic!("{}: {err}", term.path().display()));
                assert!(!locate_all(&term_name).unwrap().is_empty());
                println!("terminal: {term_name:?}");
                for (key, _) in catalog.booleans() {
                    println!("\t{},", key.code());
                }
                for (key, value) in catalog.numerics() {
                    println!("\t{}#{value},", key.code());
                }
                for (key, value) in catalog.strings() {
                    println!("\t{}={:?},", key.code(), value.value());
                }
            }
        }
    }
}

#[test]
fn test_all_builtins() {
    for name in builtin::names() {
        let (_, data) = builtin::find(name).unwrap();
        let catalog = load(data).unwrap();
        assert_eq!(catalog.canonical_name(), name);

        let extended = catalog.extended();
        let strings = catalog
            .strings()
            .map(|(key, value)| (key.code(), value))
            .chain(
                extended
                    .get_names(CapabilityKind::String)
                    .into_iter()
                    .filter_map(|key| Some((key, extended.get_string(key)?))),
            );
        for (key, value) in strings {
            let tokens = value
                .tokens()
                .unwrap_or_else(|err| panic!("{name} {key}: {err}"));
            // u6 describes the cursor position report, it is not sent
            if tokens.is_empty() || key == "u6" {
                continue;
            }
            let args = vec![Value::from(1); 9];
            value
                .expand(&args)
                .unwrap_or_else(|err| panic!("{name} {key}={:?}: {err}", value.value()));
        }
    }
}

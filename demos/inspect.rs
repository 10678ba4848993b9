use std::{env, error::Error, io, io::Write};

use terminfo_engine::{
    CapabilityKind, StringCapability, Value, catalog::to_bytes, padding, resolve,
};

fn main() -> Result<(), Box<dyn Error>> {
    let term_name = env::args().nth(1);
    let catalog = resolve(term_name.as_deref())?;

    println!("terminal: {}", catalog.names().join("|"));
    for (capability, value) in catalog.booleans() {
        if value {
            println!("\t{},", capability.code());
        }
    }
    for (capability, value) in catalog.numerics() {
        println!("\t{}#{value},", capability.code());
    }
    for (capability, value) in catalog.strings() {
        println!("\t{}={:?},", capability.code(), value.value());
    }

    let extended = catalog.extended();
    if !extended.is_empty() {
        println!("extended:");
        for name in extended.get_names(CapabilityKind::Boolean) {
            println!("\t{name},");
        }
        for name in extended.get_names(CapabilityKind::Numeric) {
            if let Some(value) = extended.get_numeric(name) {
                println!("\t{name}#{value},");
            }
        }
        for name in extended.get_names(CapabilityKind::String) {
            if let Some(value) = extended.get_string(name) {
                println!("\t{name}={:?},", value.value());
            }
        }
    }

    let Some(cup) = catalog.get_string(StringCapability::CursorAddress) else {
        println!("Your terminal cannot move the cursor");
        return Ok(());
    };
    let expanded = cup.expand(&[Value::from(5), Value::from(10)])?;
    println!("cup at row 5, column 10: {expanded:?}");

    if let Some(smulx) = catalog.get_string_by_code("Smulx") {
        for style in [0, 1, 2, 3, 4, 5, 0] {
            let expanded = padding::strip(&smulx.expand(&[Value::from(style)])?)?;
            io::stdout().write_all(&to_bytes(&expanded))?;
            println!("Underline style {style}");
        }
    }

    Ok(())
}

//! Regenerate the clutch equation reference from the registry.
//!
//! ```bash
//! cargo run --bin gen-equations                  # write the default file
//! cargo run --bin gen-equations -- docs/EQ.md    # write somewhere else
//! cargo run --bin gen-equations -- --check       # fail if the file is stale
//! ```
//!
//! Paths are relative to the workspace root.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use clutch_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "clutch_core/src/equations/EQUATIONS.md";

fn main() {
    let mut check = false;
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--check" => check = true,
            _ => output = PathBuf::from(&arg),
        }
    }

    let markdown = generate_equations_markdown();

    if check {
        match fs::read_to_string(&output) {
            Ok(existing) if existing == markdown => return,
            Ok(_) => eprintln!("{} is out of date; run gen-equations", output.display()),
            Err(e) => eprintln!("cannot read {}: {}", output.display(), e),
        }
        process::exit(1);
    }

    if let Err(e) = fs::write(&output, &markdown) {
        eprintln!("cannot write {}: {}", output.display(), e);
        process::exit(1);
    }
    println!(
        "wrote {} equations ({} bytes) to {}",
        ALL_EQUATIONS.len(),
        markdown.len(),
        output.display()
    );
}

//! Build script to generate the embedded dictionary
//!
//! Reads `data/words.txt` and writes a `WORDS` const slice plus its length
//! into `OUT_DIR/words.rs`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const INPUT: &str = "data/words.txt";

fn render(words: &[&str]) -> String {
    let mut source = String::from(
        "// Generated from data/words.txt\n\n\
         /// Valid five-letter guesses, in dictionary order\n\
         pub const WORDS: &[&str] = &[\n",
    );
    for word in words {
        let _ = writeln!(source, "    {word:?},");
    }
    let _ = write!(
        source,
        "];\n\n/// Number of words in WORDS\npub const WORDS_COUNT: usize = {};\n",
        words.len()
    );
    source
}

fn main() {
    println!("cargo:rerun-if-changed={INPUT}");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let content =
        fs::read_to_string(INPUT).unwrap_or_else(|e| panic!("Failed to read {INPUT}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, render(&words))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}

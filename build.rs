//! Build script embedding the game's word lists
//!
//! `data/answers.txt` holds the words a game can be played against, in the
//! order the daily rotation walks them. `data/allowed.txt` holds extra words
//! accepted as guesses. Every answer must also be a legal guess, so the
//! generated `ALLOWED` list is the union of both files.
//!
//! A line that is not exactly five ASCII letters fails the build, so the
//! game never has to reject an embedded word at runtime.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const ANSWERS_FILE: &str = "data/answers.txt";
const ALLOWED_FILE: &str = "data/allowed.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Daily index = days since epoch mod len, so order is kept and only
    // repeats are dropped
    let mut seen = BTreeSet::new();
    let answers: Vec<String> = read_words(ANSWERS_FILE)
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect();

    let allowed: BTreeSet<String> = read_words(ALLOWED_FILE)
        .into_iter()
        .chain(answers.iter().cloned())
        .collect();

    write_word_list(
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words that can be picked as the target of a game, in daily order",
        &answers,
    );

    write_word_list(
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "Every word accepted as a guess, answers included, sorted",
        &allowed.into_iter().collect::<Vec<_>>(),
    );

    println!("cargo:rerun-if-changed={ANSWERS_FILE}");
    println!("cargo:rerun-if-changed={ALLOWED_FILE}");
}

/// Lowercased words from one list file; blank lines are skipped
fn read_words(path: &str) -> Vec<String> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let word = line.trim().to_ascii_lowercase();
            if word.is_empty() {
                return None;
            }
            assert!(
                word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
                "{path}:{}: '{word}' is not a five-letter word",
                i + 1
            );
            Some(word)
        })
        .collect()
}

fn write_word_list(output_path: &Path, const_name: &str, doc_comment: &str, words: &[String]) {
    let count = words.len();
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {ANSWERS_FILE} and {ALLOWED_FILE}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

//! Word list loading utilities
//!
//! Loads newline-delimited word lists from files or embedded constants.

use super::{ALLOWED, ANSWERS, Dictionary, TargetSelection};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and
/// entries that are not five letters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_mates::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid entries in {}", path.display());
    }
    log::info!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_mates::wordlists::loader::words_from_slice;
/// use wordle_mates::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Dictionary over the embedded lists, or a custom answer file
///
/// A custom file replaces the answers; the embedded accepted-guess list
/// still applies on top of it.
///
/// # Errors
///
/// Returns an error if the custom file cannot be read or yields no words.
pub fn build_dictionary(
    custom_answers: Option<&Path>,
    selection: TargetSelection,
) -> anyhow::Result<Dictionary> {
    let answers = match custom_answers {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(ANSWERS),
    };
    Ok(Dictionary::new(answers, words_from_slice(ALLOWED), selection)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSource;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plane\n\n  slate  \nnope\nr0bot\nCRANE").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["PLANE", "SLATE", "CRANE"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn build_dictionary_from_embedded_lists() {
        let dictionary = build_dictionary(None, TargetSelection::Random).unwrap();
        assert_eq!(dictionary.answers().len(), ANSWERS.len());
        assert!(dictionary.is_valid_guess(dictionary.current_target()));
    }

    #[test]
    fn build_dictionary_from_custom_answers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zesty").unwrap();

        let dictionary = build_dictionary(Some(file.path()), TargetSelection::Daily).unwrap();
        assert_eq!(dictionary.current_target().text(), "ZESTY");
    }

    #[test]
    fn build_dictionary_rejects_empty_custom_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(build_dictionary(Some(file.path()), TargetSelection::Random).is_err());
    }
}

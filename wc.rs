use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::cloud_types::WordCount;
use crate::error::{CloudError, Result};

/// Characters that end a word. Everything else is part of one.
pub const SEPARATORS: &str = " \t\n\r\",-.!?'[];:/()*`";

// Compile the word matcher once, from the same separator set
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[^{}]+", regex::escape(SEPARATORS)))
        .expect("escaped separator class is a valid regex")
});

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(c)
}

/// Maximal runs of word characters in `line`, lower-cased.
pub fn tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    WORD_REGEX.find_iter(line).map(|m| m.as_str().to_lowercase())
}

/// Count every word in an in-memory document.
pub fn count_text(text: &str) -> WordCount {
    WordCount::from_tokens(text.lines().flat_map(tokens))
}

/// Read `reader` to exhaustion and count its words.
///
/// The reader is borrowed, not closed. A read failure anywhere discards the
/// partial counts.
pub fn count_words<R: BufRead>(reader: R) -> Result<WordCount> {
    let mut words = Vec::new();
    let mut line_count = 0usize;
    for line in reader.lines() {
        let line = line.map_err(CloudError::InputRead)?;
        line_count += 1;
        words.extend(tokens(&line));
    }
    let counts = WordCount::from_tokens(words);
    debug!(
        lines = line_count,
        tokens = counts.total(),
        distinct = counts.len(),
        "counted words"
    );
    Ok(counts)
}
